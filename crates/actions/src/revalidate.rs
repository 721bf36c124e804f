/// Listing page every investment mutation invalidates and redirects to.
pub const INVESTMENTS_PATH: &str = "/dashboard/investments";

/// Invalidates cached views after a mutation.
pub trait Revalidator: Send + Sync {
    /// Drops every cached view at `path` or below it.
    fn revalidate_path(&self, path: &str);
}

/// Where the caller should be sent after a successful action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub location: &'static str,
}

impl Redirect {
    pub const fn to(location: &'static str) -> Self {
        Self { location }
    }
}
