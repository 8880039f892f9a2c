//! PKCS#7-style padding to and from whole 8-byte blocks.
//!
//! `pad` always appends between 1 and 8 bytes, each holding the count of
//! padding bytes, so a message whose length is already a multiple of 8
//! grows by a full block.
//!
//! `unpad` treats invalid padding as "nothing to strip" and returns the
//! data unchanged rather than raising an error. This silent passthrough
//! replicates the original C++ implementation and is a known weak point
//! of the scheme: a corrupted final block can yield a wrong-length result
//! instead of a decryption failure.

/// Appends PKCS#7-style padding so the length becomes a multiple of 8.
///
/// # Parameters
/// - `data`: The data to pad.
///
/// # Returns
/// A new buffer of length `data.len() + n` where `n = 8 - (data.len() % 8)`
/// (8 when the input length is already a multiple of 8), with each appended
/// byte holding the value `n`.
pub(crate) fn pad(data: &[u8]) -> Vec<u8> {
    let padding_len = 8 - (data.len() % 8);
    let mut padded = Vec::with_capacity(data.len() + padding_len);
    padded.extend_from_slice(data);
    padded.resize(data.len() + padding_len, padding_len as u8);
    padded
}

/// Strips PKCS#7-style padding.
///
/// Reads the last byte as the padding count `n` and removes the last `n`
/// bytes. Empty input yields empty output. If `n > 8` or `n` exceeds the
/// data length, the padding is invalid and the data is returned unchanged
/// (see the module documentation for why no error is raised).
///
/// # Parameters
/// - `data`: The padded data.
///
/// # Returns
/// The data with padding removed, or unchanged when the padding is invalid.
pub(crate) fn unpad(data: &[u8]) -> Vec<u8> {
    let Some(&last) = data.last() else {
        return Vec::new();
    };
    let padding_len = last as usize;
    if padding_len > 8 || padding_len > data.len() {
        return data.to_vec();
    }
    data[..data.len() - padding_len].to_vec()
}
