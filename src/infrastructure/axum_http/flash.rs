use axum_extra::extract::cookie::{Cookie, CookieJar};

pub const FLASH_COOKIE: &str = "flash";

/// Attaches a one-shot acknowledgment to the response, to be shown by the
/// page rendered after the redirect.
pub fn set_flash(jar: CookieJar, message: &str) -> CookieJar {
    jar.add(
        Cookie::build((FLASH_COOKIE, message.to_string()))
            .path("/")
            .build(),
    )
}

/// Reads and clears the pending flash message, if any.
pub fn take_flash(jar: CookieJar) -> (CookieJar, Option<String>) {
    let message = jar
        .get(FLASH_COOKIE)
        .map(|cookie| cookie.value().to_string());

    let jar = if message.is_some() {
        jar.remove(Cookie::build(FLASH_COOKIE).path("/").build())
    } else {
        jar
    };

    (jar, message)
}
