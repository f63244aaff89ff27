/// Which users a user list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserFilter {
    #[default]
    All,
    Students,
    Teachers,
}

impl UserFilter {
    pub const ALL: [UserFilter; 3] = [Self::All, Self::Students, Self::Teachers];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Students => "Students",
            Self::Teachers => "Teachers",
        }
    }

    /// API resource path listing the users of this filter
    pub fn api_path(&self) -> &'static str {
        match self {
            Self::All => "AppUser",
            Self::Students => "AppUser/Students",
            Self::Teachers => "AppUser/Teachers",
        }
    }
}
