#[cfg(test)]
pub mod test {
    use std::collections::HashMap;
    use std::time::Duration;

    use crate::tags::Field;

    /// The classic block: a bounded integer, an enumerated string and a field
    /// the binder must not touch.
    #[derive(Debug, Default, PartialEq)]
    pub struct Alias {
        pub int64_val: i64,
        pub string_val: String,
        pub scratch: String,
    }

    crate::record!(Alias {
        int64_val => Field::new("Int64Val").min("100500"),
        string_val => r#"conf:"StringVal" enum:"sample1;sample""#,
        scratch => Field::skip(),
    });

    // -- Collections ------------------------------------------------------------

    #[derive(Debug, Default, PartialEq)]
    pub struct Tiers {
        pub levels: Vec<u32>,
        pub labels: HashMap<String, String>,
    }

    crate::record!(Tiers {
        levels => Field::new("Levels"),
        labels => Field::new("Labels"),
    });

    // -- Environment substitution and durations -----------------------------------

    #[derive(Debug, Default, PartialEq)]
    pub struct Listener {
        pub token: String,
        pub timeout: Duration,
    }

    crate::record!(Listener {
        token => Field::new("Token").env("true"),
        timeout => Field::new("Timeout"),
    });

    // -- Optional scalars and nested records --------------------------------------

    #[derive(Debug, Default, PartialEq)]
    pub struct Replica {
        pub host: String,
        pub weight: Option<u8>,
    }

    crate::record!(Replica {
        host => Field::new("Host"),
        weight => Field::new("Weight").min("1").max("10"),
    });

    #[derive(Debug, Default, PartialEq)]
    pub struct Pool {
        pub size: usize,
        pub idle: Option<u32>,
        pub backup: Option<Replica>,
    }

    crate::record!(Pool {
        size => Field::new("Size"),
        idle => Field::new("Idle").max("16"),
        backup => Field::new("Backup"),
    });

    // -- One field per scalar kind --------------------------------------------------

    #[derive(Debug, Default, PartialEq)]
    pub struct Scalars {
        pub i8: i8,
        pub u16: u16,
        pub usize: usize,
        pub f32: f32,
        pub f64: f64,
        pub flag: bool,
        pub text: String,
        pub wait: Duration,
    }

    crate::record!(Scalars {
        i8 => Field::new("I8"),
        u16 => Field::new("U16"),
        usize => Field::new("Usize"),
        f32 => Field::new("F32"),
        f64 => Field::new("F64").max("3.1415"),
        flag => Field::new("Flag"),
        text => Field::new("Text"),
        wait => Field::new("Wait"),
    });

    pub const ALIAS_YAML: &str = "\
Alias:
  Int64Val: 100500
  StringVal: sample
Tiers:
  Levels: [1, 2, 3]
  Labels:
    Field1: qwerty
    Field2: 42
";

    #[test]
    fn alias_fixture_binds_from_shared_document() {
        let doc = crate::document::Document::parse(ALIAS_YAML.as_bytes(), crate::types::Format::Yaml)
            .unwrap();
        assert_eq!(doc.len(), 2);
        assert!(doc.block("Alias").is_ok());
    }
}
