use core::fmt;

/// A 12-byte document identifier.
///
/// The bytes are opaque to this crate; they are carried through unchanged.
///
/// ```
/// use vc_bson::ObjectId;
///
/// let id = ObjectId::from_hex("65a1f0c2e4b0a1b2c3d4e5f6").unwrap();
///
/// assert_eq!(id.bytes()[0], 0x65);
/// assert_eq!(id.to_string(), "65a1f0c2e4b0a1b2c3d4e5f6");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId([u8; 12]);

vc_reflect::impl_reflect_opaque!(ObjectId => "vc_bson::ObjectId", "ObjectId");

impl ObjectId {
    /// Number of bytes of an id.
    pub const LEN: usize = 12;

    #[inline]
    pub const fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn bytes(&self) -> [u8; 12] {
        self.0
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 12] {
        &self.0
    }

    /// Parses 24 hexadecimal digits, either case.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.as_bytes();
        if hex.len() != Self::LEN * 2 {
            return None;
        }
        let mut bytes = [0u8; 12];
        for (byte, pair) in bytes.iter_mut().zip(hex.chunks_exact(2)) {
            *byte = (hex_digit(pair[0])? << 4) | hex_digit(pair[1])?;
        }
        Some(Self(bytes))
    }
}

fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl From<[u8; 12]> for ObjectId {
    #[inline]
    fn from(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({self})")
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use vc_reflect::Reflect;
    use vc_reflect::info::{ReflectKind, TypePath};

    use super::ObjectId;

    #[test]
    fn hex_parsing() {
        assert!(ObjectId::from_hex("").is_none());
        assert!(ObjectId::from_hex("zz0000000000000000000000").is_none());

        let id = ObjectId::from_hex("000102030405060708090A0B").unwrap();
        assert_eq!(id.bytes(), [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
        assert_eq!(format!("{id:?}"), "ObjectId(000102030405060708090a0b)");
    }

    #[test]
    fn reflected_as_opaque() {
        let id = ObjectId::from_bytes([7; 12]);
        assert_eq!(id.reflect_kind(), ReflectKind::Opaque);
        assert_eq!(ObjectId::type_path(), "vc_bson::ObjectId");

        let copy = id.reflect_clone();
        assert_eq!(copy.downcast_ref::<ObjectId>(), Some(&id));
    }
}
