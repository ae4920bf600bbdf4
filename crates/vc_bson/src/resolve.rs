//! Name resolution for keyed writes.

use alloc::string::String;

use vc_reflect::info::{MapInfo, StructInfo};

/// Returns the index of the field `key` names, ignoring case.
///
/// The key is lower-cased once and compared against the cached lower-cased
/// field names in declaration order; the first match wins.
///
/// ```
/// use vc_bson::resolve::field_index;
/// use vc_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect, Clone)]
/// struct Account {
///     user_name: String,
///     balance: i64,
/// }
///
/// let info = Account::type_info().as_struct().unwrap();
///
/// assert_eq!(field_index(info, "BALANCE"), Some(1));
/// assert_eq!(field_index(info, "User_Name"), Some(0));
/// assert_eq!(field_index(info, "missing"), None);
/// ```
pub fn field_index(info: &StructInfo, key: &str) -> Option<usize> {
    let key = key.to_lowercase();
    info.iter()
        .position(|field| field.lowercase_name() == key)
}

/// Returns `true` if entries of the map can be addressed by document keys.
///
/// The declared key type must be exactly `String`.
#[inline]
pub fn accepts_string_keys(info: &MapInfo) -> bool {
    info.key_is::<String>()
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;

    use vc_reflect::info::Typed;

    use super::accepts_string_keys;

    #[test]
    fn map_key_types() {
        let strings = <BTreeMap<String, u8>>::type_info().as_map().unwrap();
        let ints = <BTreeMap<i32, u8>>::type_info().as_map().unwrap();

        assert!(accepts_string_keys(strings));
        assert!(!accepts_string_keys(ints));
    }
}
