fn main() {
    gitcmd::app::cli::run();
}
