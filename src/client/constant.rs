pub const SITE_NAME: &str = "Westcoast Education";
