use anyhow::Result;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

/// Headers signed on every request, lexicographically ordered as Signature
/// Version 4 requires.
const SIGNED_HEADER_LIST: &str = "content-type;host;x-amz-date;x-amz-target";

const SIGNING_ALGORITHM: &str = "AWS4-HMAC-SHA256";
const REQUEST_TERMINATOR: &str = "aws4_request";

pub struct SigningInput<'a> {
    pub access_key_id: &'a str,
    pub secret_access_key: &'a str,
    pub region: &'a str,
    pub service: &'a str,
    pub host: &'a str,
    pub amz_target: &'a str,
    pub content_type: &'a str,
    pub payload: &'a [u8],
    pub timestamp: DateTime<Utc>,
}

pub struct SignedRequestHeaders {
    pub authorization: String,
    pub amz_date: String,
}

/// Produces the `Authorization` and `X-Amz-Date` header values for a POST to
/// the service root path, per the AWS Signature Version 4 scheme.
pub fn sign_request(input: &SigningInput) -> Result<SignedRequestHeaders> {
    let amz_date = input.timestamp.format("%Y%m%dT%H%M%SZ").to_string();
    let date_stamp = input.timestamp.format("%Y%m%d").to_string();

    let canonical_request = build_canonical_request(input, &amz_date);
    let credential_scope = format!(
        "{}/{}/{}/{}",
        date_stamp, input.region, input.service, REQUEST_TERMINATOR
    );

    let string_to_sign = format!(
        "{}\n{}\n{}\n{}",
        SIGNING_ALGORITHM,
        amz_date,
        credential_scope,
        hex_sha256(canonical_request.as_bytes())
    );

    let signing_key = derive_signing_key(
        input.secret_access_key,
        &date_stamp,
        input.region,
        input.service,
    )?;
    let signature = hex::encode(hmac_sha256(&signing_key, string_to_sign.as_bytes())?);

    let authorization = format!(
        "{} Credential={}/{}, SignedHeaders={}, Signature={}",
        SIGNING_ALGORITHM, input.access_key_id, credential_scope, SIGNED_HEADER_LIST, signature
    );

    Ok(SignedRequestHeaders {
        authorization,
        amz_date,
    })
}

fn build_canonical_request(input: &SigningInput, amz_date: &str) -> String {
    let canonical_headers = format!(
        "content-type:{}\nhost:{}\nx-amz-date:{}\nx-amz-target:{}\n",
        input.content_type, input.host, amz_date, input.amz_target
    );

    format!(
        "POST\n/\n\n{}\n{}\n{}",
        canonical_headers,
        SIGNED_HEADER_LIST,
        hex_sha256(input.payload)
    )
}

fn derive_signing_key(
    secret_access_key: &str,
    date_stamp: &str,
    region: &str,
    service: &str,
) -> Result<Vec<u8>> {
    let seed = format!("AWS4{}", secret_access_key);
    let date_key = hmac_sha256(seed.as_bytes(), date_stamp.as_bytes())?;
    let region_key = hmac_sha256(&date_key, region.as_bytes())?;
    let service_key = hmac_sha256(&region_key, service.as_bytes())?;
    hmac_sha256(&service_key, REQUEST_TERMINATOR.as_bytes())
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| anyhow::anyhow!("invalid HMAC key length: {}", e))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

fn hex_sha256(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_input(payload: &'static [u8]) -> SigningInput<'static> {
        SigningInput {
            access_key_id: "AKIDEXAMPLE",
            secret_access_key: "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
            region: "us-east-1",
            service: "rekognition",
            host: "rekognition.us-east-1.amazonaws.com",
            amz_target: "RekognitionService.DetectFaces",
            content_type: "application/x-amz-json-1.1",
            payload,
            timestamp: Utc.with_ymd_and_hms(2015, 8, 30, 12, 36, 0).unwrap(),
        }
    }

    fn extract_signature(authorization: &str) -> &str {
        authorization
            .split("Signature=")
            .nth(1)
            .expect("authorization header has a signature")
    }

    #[test]
    fn test_hex_sha256_of_empty_payload_matches_known_digest() {
        assert_eq!(
            hex_sha256(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_amz_date_uses_basic_iso8601_format() {
        let headers = sign_request(&test_input(b"{}")).unwrap();

        assert_eq!(headers.amz_date, "20150830T123600Z");
    }

    #[test]
    fn test_signature_is_64_hex_characters() {
        let headers = sign_request(&test_input(b"{}")).unwrap();
        let signature = extract_signature(&headers.authorization);

        assert_eq!(signature.len(), 64);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_signing_is_deterministic_for_fixed_timestamp() {
        let first = sign_request(&test_input(b"{\"Image\":{}}")).unwrap();
        let second = sign_request(&test_input(b"{\"Image\":{}}")).unwrap();

        assert_eq!(first.authorization, second.authorization);
        assert_eq!(first.amz_date, second.amz_date);
    }

    #[test]
    fn test_different_secrets_produce_different_signatures() {
        let baseline = sign_request(&test_input(b"{}")).unwrap();

        let mut other_input = test_input(b"{}");
        other_input.secret_access_key = "a-different-secret";
        let other = sign_request(&other_input).unwrap();

        assert_ne!(
            extract_signature(&baseline.authorization),
            extract_signature(&other.authorization)
        );
    }

    #[test]
    fn test_different_payloads_produce_different_signatures() {
        let first = sign_request(&test_input(b"{\"a\":1}")).unwrap();
        let second = sign_request(&test_input(b"{\"a\":2}")).unwrap();

        assert_ne!(
            extract_signature(&first.authorization),
            extract_signature(&second.authorization)
        );
    }

    #[test]
    fn test_authorization_carries_credential_scope_and_signed_headers() {
        let headers = sign_request(&test_input(b"{}")).unwrap();

        assert!(headers.authorization.starts_with("AWS4-HMAC-SHA256 "));
        assert!(headers
            .authorization
            .contains("Credential=AKIDEXAMPLE/20150830/us-east-1/rekognition/aws4_request"));
        assert!(headers
            .authorization
            .contains("SignedHeaders=content-type;host;x-amz-date;x-amz-target"));
    }

    #[test]
    fn test_canonical_request_orders_headers_lexicographically() {
        let input = test_input(b"{}");
        let canonical = build_canonical_request(&input, "20150830T123600Z");

        let content_type_pos = canonical.find("content-type:").unwrap();
        let host_pos = canonical.find("host:").unwrap();
        let date_pos = canonical.find("x-amz-date:").unwrap();
        let target_pos = canonical.find("x-amz-target:").unwrap();

        assert!(content_type_pos < host_pos);
        assert!(host_pos < date_pos);
        assert!(date_pos < target_pos);
    }
}
