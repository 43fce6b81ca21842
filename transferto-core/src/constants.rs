pub const DEFAULT_ENDPOINT: &str = "https://fm.transfer-to.com/cgi-bin/shop/topup";

pub const DEFAULT_CURRENCY: &str = "USD";

/// Keys whose values are free text and are never split on commas.
pub const UNSPLIT_KEYS: [&str; 3] = ["promotion", "sms", "info_txt"];

/// Nonce suffix is drawn from `1..=NONCE_RANDOM_MAX`.
pub const NONCE_RANDOM_MAX: u32 = 1000;

/// `error_code` value of a successful response.
pub const SUCCESS_CODE: &str = "0";

// Query fields added to every request.
pub const LOGIN_FIELD: &str = "login";
pub const KEY_FIELD: &str = "key";
pub const MD5_FIELD: &str = "md5";

// Response fields.
pub const ERROR_CODE_FIELD: &str = "error_code";
pub const ERROR_TXT_FIELD: &str = "error_txt";
