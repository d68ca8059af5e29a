//! Navigation side effects triggered by session and form transitions.
//!
//! Redirects go through a [`Navigator`] so transition logic can be tested
//! without a browser `Location`.

use std::cell::RefCell;
use std::rc::Rc;

/// Where forced and post-logout redirects land.
pub const SIGN_IN_PATH: &str = "/login";
/// Landing page after sign-in or sign-up.
pub const HOME_PATH: &str = "/home";

pub trait Navigator {
    /// Navigate to `path`, keeping the current entry in history.
    fn go_to(&self, path: &str);
    /// Navigate to `path`, replacing the current history entry so the back
    /// button cannot return to it.
    fn replace_history_and_go_to(&self, path: &str);
}

/// Full-page navigation through `window.location`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn go_to(&self, path: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(path);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
        }
    }

    fn replace_history_and_go_to(&self, path: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().replace(path);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
        }
    }
}

/// A navigation recorded by [`RecordingNavigator`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    Push(String),
    Replace(String),
}

/// Records navigations instead of performing them.
#[derive(Clone, Debug, Default)]
pub struct RecordingNavigator {
    log: Rc<RefCell<Vec<Navigation>>>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn history(&self) -> Vec<Navigation> {
        self.log.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, path: &str) {
        self.log.borrow_mut().push(Navigation::Push(path.to_owned()));
    }

    fn replace_history_and_go_to(&self, path: &str) {
        self.log.borrow_mut().push(Navigation::Replace(path.to_owned()));
    }
}
