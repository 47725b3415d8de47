//! Bearer-token claim decoding.
//! The backend issues standard three-segment compact tokens; only the payload
//! segment is read here (base64url JSON). The signature is the backend's
//! business and is never verified client-side.

use base64::Engine;
use serde_json::Value;

use super::user::{LocalUser, Role};

/// Claim key carrying the user's role. This exact URI is the contract with
/// the issuing backend; do not shorten it.
pub const ROLE_CLAIM: &str = "http://schemas.microsoft.com/ws/2008/06/identity/claims/role";

/// Decode the identity embedded in `token`. Any malformed input (wrong
/// segment count, bad base64, bad JSON, missing/unknown claims) yields `None`;
/// decode problems are never surfaced past this function.
pub fn decode_user(token: &str) -> Option<LocalUser> {
    let payload = token.split('.').nth(1)?;
    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .ok()?;
    let claims: Value = serde_json::from_slice(&bytes).ok()?;

    let email = claims.get("email")?.as_str()?.to_string();
    let role = match claims.get(ROLE_CLAIM)?.as_str()? {
        "Admin" => Role::Admin,
        "Employee" => Role::Employee,
        _ => return None,
    };
    let profile_complete = claims
        .get("profileComplete")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    Some(LocalUser {
        profile_complete: Some(profile_complete),
        ..LocalUser::new(email, role)
    })
}

#[cfg(test)]
pub(crate) fn encode_token(claims: &Value) -> String {
    let engine = &base64::engine::general_purpose::URL_SAFE_NO_PAD;
    let header = engine.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = engine.encode(serde_json::to_vec(claims).unwrap());
    format!("{header}.{payload}.sig")
}
