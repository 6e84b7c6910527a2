//! Client-side routes

use std::fmt;

/// Views reachable by path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Landing,
    /// `/dashboard` (and the legacy `/admin`)
    Dashboard,
    /// `/register`
    Register,
    /// `/{short_code}`: the miner page
    Redirect(String),
}

impl Route {
    /// Resolve a path.
    ///
    /// Leading/trailing slashes are ignored; anything that is not a known
    /// page is treated as a short code (first segment only).
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim().trim_matches('/');
        let first = trimmed.split('/').next().unwrap_or_default();

        match first {
            "" => Route::Landing,
            "dashboard" | "admin" => Route::Dashboard,
            "register" => Route::Register,
            code => Route::Redirect(code.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Register => "/register".to_string(),
            Route::Redirect(code) => format!("/{}", code),
        }
    }

    pub fn short_code(&self) -> Option<&str> {
        match self {
            Route::Redirect(code) => Some(code),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Accepts `abc`, `/abc`, or a full short link under `frontend_url`
pub fn short_code_from_target(target: &str, frontend_url: &str) -> Option<String> {
    let target = target.trim();
    let base = frontend_url.trim_end_matches('/');

    let path = if let Some(rest) = target.strip_prefix(base) {
        rest.to_string()
    } else if let Ok(parsed) = url::Url::parse(target)
        && matches!(parsed.scheme(), "http" | "https")
    {
        parsed.path().to_string()
    } else {
        target.to_string()
    };

    Route::parse(&path).short_code().map(str::to_string)
}
