//! Printable forms of command lines.

use std::borrow::Cow;

use url::Url;

/// Mask inline credentials of an `http(s)` URL.
///
/// The password is masked when present; otherwise a non-empty username is
/// the secret (`https://<token>@host/...`) and is masked instead. Anything
/// that does not parse as such a URL is returned untouched.
pub fn redact_url(arg: &str) -> Cow<'_, str> {
    let Ok(mut url) = Url::parse(arg) else {
        return Cow::Borrowed(arg);
    };
    if !matches!(url.scheme(), "http" | "https") {
        return Cow::Borrowed(arg);
    }
    let masked = if url.password().is_some() {
        url.set_password(Some("***"))
    } else if !url.username().is_empty() {
        url.set_username("***")
    } else {
        return Cow::Borrowed(arg);
    };
    match masked {
        Ok(()) => Cow::Owned(url.to_string()),
        Err(()) => Cow::Borrowed(arg),
    }
}

/// Join an argument vector with spaces, redacting credentials.
pub fn display_command(argv: &[&str]) -> String {
    argv.iter().map(|arg| redact_url(arg)).collect::<Vec<_>>().join(" ")
}
