pub const QUICKSERV_APP_NAME: &str = "quickserv";

pub const DASH_LINE: &str = "---------------------------------------------------";
