use chrono::{DateTime, Utc};

crate::impl_reflect_opaque!(DateTime<Utc> => "chrono::DateTime<chrono::Utc>", "DateTime<Utc>");

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use crate::Reflect;
    use crate::info::{ReflectKind, TypePath};

    #[test]
    fn date_time_is_opaque() {
        assert_eq!(<DateTime<Utc>>::type_path(), "chrono::DateTime<chrono::Utc>");

        let date = DateTime::<Utc>::from_timestamp_millis(1_000).unwrap();
        assert_eq!(date.reflect_kind(), ReflectKind::Opaque);
        assert_eq!(date.reflect_clone().take::<DateTime<Utc>>().unwrap(), date);
    }
}
