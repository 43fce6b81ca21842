use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use md5::{Digest, Md5};
use rand::Rng;

use crate::constants::{KEY_FIELD, LOGIN_FIELD, MD5_FIELD, NONCE_RANDOM_MAX};
use crate::error::{Error, Result};
use crate::params::Params;

/// Login/token pair issued by the provider.
///
/// The token only ever leaves this struct folded into an md5 signature.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    login: String,
    token: String,
}

impl Credentials {
    pub fn new(login: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let login = login.into();
        let token = token.into();
        if login.is_empty() {
            return Err(Error::EmptyCredential("login"));
        }
        if token.is_empty() {
            return Err(Error::EmptyCredential("token"));
        }
        Ok(Self { login, token })
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    /// `md5_hex(login ++ token ++ key)`, the signature the provider checks.
    pub fn signature(&self, key: &str) -> String {
        let mut hasher = Md5::new();
        hasher.update(self.login.as_bytes());
        hasher.update(self.token.as_bytes());
        hasher.update(key.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Adds `login`, a fresh `key` and its `md5` to `params`.
    ///
    /// The three fields are inserted last, so they replace any caller value
    /// stored under the same name.
    pub fn sign(&self, mut params: Params) -> Params {
        let key = generate_nonce();
        let md5 = self.signature(&key);
        params.insert(LOGIN_FIELD, self.login.as_str());
        params.insert(KEY_FIELD, key);
        params.insert(MD5_FIELD, md5);
        params
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("token", &"<redacted>")
            .finish()
    }
}

thread_local! {
    // Suffixes already handed out during the current millisecond.
    static ISSUED: RefCell<(u128, HashSet<u32>)> = RefCell::new((0, HashSet::new()));
}

fn unix_millis() -> u128 {
    // a clock before the epoch still yields a usable (if odd) nonce
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

/// Per-request nonce: unix time in milliseconds followed by a random number
/// in `1..=1000`.
///
/// Hardening: a suffix is redrawn when the calling thread already used it in
/// the same millisecond, and once all 1000 are taken the call waits for the
/// clock to tick. Nonces from one thread therefore never repeat within a
/// millisecond.
pub fn generate_nonce() -> String {
    let mut rng = rand::thread_rng();
    loop {
        let now = unix_millis();
        let suffix = ISSUED.with(|issued| {
            let mut issued = issued.borrow_mut();
            if issued.0 != now {
                *issued = (now, HashSet::new());
            }
            if issued.1.len() as u32 >= NONCE_RANDOM_MAX {
                return None;
            }
            loop {
                let suffix = rng.gen_range(1..=NONCE_RANDOM_MAX);
                if issued.1.insert(suffix) {
                    return Some(suffix);
                }
            }
        });
        match suffix {
            Some(suffix) => return format!("{}{}", now, suffix),
            None => std::thread::yield_now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_signature_matches_known_digest() {
        let creds = Credentials::new("fake-login", "fake-token").unwrap();
        // md5("fake-loginfake-token12345")
        let expected = hex::encode(Md5::digest(b"fake-loginfake-token12345"));
        assert_eq!(creds.signature("12345"), expected);
        assert_eq!(creds.signature("12345").len(), 32);
        assert!(creds
            .signature("12345")
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_md5_known_vector() {
        // sanity check against the well-known md5 of "abc"
        let creds = Credentials::new("a", "b").unwrap();
        assert_eq!(creds.signature("c"), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn test_sign_injects_fields() {
        let creds = Credentials::new("fake-login", "fake-token").unwrap();
        let mut params = Params::new();
        params.insert("action", "pricelist");
        params.insert("login", "someone-else");

        let signed = creds.sign(params);
        assert_eq!(signed.get("action"), Some("pricelist"));
        assert_eq!(signed.get("login"), Some("fake-login"));

        let key = signed.get("key").unwrap();
        assert_eq!(signed.get("md5"), Some(creds.signature(key).as_str()));
        assert!(signed.iter().all(|(_, v)| v != "fake-token"));
    }

    #[test]
    fn test_nonce_shape() {
        let nonce = generate_nonce();
        assert!(nonce.chars().all(|c| c.is_ascii_digit()));
        // 13 digit millis + 1..=4 digit suffix
        assert!(nonce.len() >= 14 && nonce.len() <= 17, "{}", nonce);
    }

    #[test]
    fn test_rapid_nonces_are_unique() {
        let nonces: Vec<String> = (0..1000).map(|_| generate_nonce()).collect();
        let unique: HashSet<&String> = nonces.iter().collect();
        assert_eq!(unique.len(), nonces.len());
    }

    #[test]
    fn test_nonces_past_one_thousand_stay_unique() {
        let nonces: Vec<String> = (0..2500).map(|_| generate_nonce()).collect();
        let unique: HashSet<&String> = nonces.iter().collect();
        assert_eq!(unique.len(), nonces.len());
        for nonce in &nonces {
            let suffix: u32 = nonce[13..].parse().unwrap();
            assert!((1..=NONCE_RANDOM_MAX).contains(&suffix), "{}", nonce);
        }
    }

    #[test]
    fn test_empty_credentials_rejected() {
        assert!(matches!(
            Credentials::new("", "token"),
            Err(Error::EmptyCredential("login"))
        ));
        assert!(matches!(
            Credentials::new("login", ""),
            Err(Error::EmptyCredential("token"))
        ));
    }

    #[test]
    fn test_debug_redacts_token() {
        let creds = Credentials::new("fake-login", "fake-token").unwrap();
        let debug = format!("{:?}", creds);
        assert!(debug.contains("fake-login"));
        assert!(!debug.contains("fake-token"));
    }
}
