//! Content hashing for staleness detection.
//!
//! The hash is only ever compared for equality against the value stored in
//! the metadata record.

/// Computes the BLAKE3 digest of `text` as 64 lowercase hex characters.
///
/// # Examples
///
/// ```
/// use slack_codegen::compute_hash;
///
/// let hash = compute_hash("export declare class Methods {}");
/// assert_eq!(hash.len(), 64);
/// assert_eq!(hash, compute_hash("export declare class Methods {}"));
/// ```
#[must_use]
pub fn compute_hash(text: &str) -> String {
    blake3::hash(text.as_bytes()).to_hex().to_string()
}
