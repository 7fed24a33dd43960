use std::borrow::Cow;

/// Combine a namespace, zero or more prefixes, and an optional key into a
/// single storage key.
///
/// The namespace and each prefix are prefixed by their length, so that
/// different combinations never produce the same bytes:
///
/// ```plain
/// len(namespace) | namespace | len(prefix1) | prefix1 | ... | key
/// ```
pub fn nested_namespaces_with_key(
    maybe_namespace: Option<&[u8]>,
    prefixes: &[Cow<[u8]>],
    maybe_key: Option<&Cow<[u8]>>,
) -> Vec<u8> {
    let mut size = 0;
    if let Some(namespace) = maybe_namespace {
        size += namespace.len() + 2;
    }
    for prefix in prefixes {
        size += prefix.as_ref().len() + 2;
    }
    if let Some(key) = maybe_key {
        size += key.as_ref().len();
    }

    let mut out = Vec::with_capacity(size);
    if let Some(namespace) = maybe_namespace {
        out.extend_from_slice(&encode_length(namespace));
        out.extend_from_slice(namespace);
    }
    for prefix in prefixes {
        out.extend_from_slice(&encode_length(prefix));
        out.extend_from_slice(prefix.as_ref());
    }
    if let Some(key) = maybe_key {
        out.extend_from_slice(key.as_ref());
    }
    out
}

/// Given a byte slice, return two bytes in big endian representing its length.
/// Panic if the given byte slice is longer than 65535 bytes; every key used by
/// this workspace is a short fixed-size value.
#[doc(hidden)]
pub fn encode_length<B>(bytes: B) -> [u8; 2]
where
    B: AsRef<[u8]>,
{
    let len = bytes.as_ref().len();
    if len > 0xffff {
        panic!(
            "Can't encode length because byte slice is too long: {} > {}",
            len,
            u16::MAX
        );
    }

    (len as u16).to_be_bytes()
}

/// Return the smallest byte string greater than every string that starts with
/// `bytes`, to be used as an exclusive upper bound when scanning a prefix.
#[doc(hidden)]
pub fn increment_last_byte(mut bytes: Vec<u8>) -> Vec<u8> {
    while let Some(last) = bytes.last_mut() {
        if *last == u8::MAX {
            bytes.pop();
        } else {
            *last += 1;
            return bytes;
        }
    }

    // Entirely 255, or empty: there is no upper bound. Can't happen for
    // length-prefixed namespaces.
    bytes
}

// ----------------------------------- tests -----------------------------------
