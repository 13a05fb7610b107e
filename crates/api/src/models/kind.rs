use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Language family a rule kind belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageClass {
    Generic,
    C,
    Java,
    Android,
    Python,
    Proto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleType {
    Library,
    Binary,
    Test,
    Unknown,
}

macro_rules! kinds {
    ($( $variant:ident => ($name:literal, $lang:ident, $rule:ident), )*) => {
        /// Rule kinds recognised in IDE-info records.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "&'static str")]
        pub enum Kind {
            $( $variant, )*
        }

        impl Kind {
            pub const ALL: &'static [Kind] = &[$( Kind::$variant, )*];

            /// Resolve a kind string as written by the aspect. Unknown strings yield `None`.
            pub fn from_kind_string(kind: &str) -> Option<Kind> {
                match kind {
                    $( $name => Some(Kind::$variant), )*
                    _ => None,
                }
            }

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Kind::$variant => $name, )*
                }
            }

            pub fn language_class(&self) -> LanguageClass {
                match self {
                    $( Kind::$variant => LanguageClass::$lang, )*
                }
            }

            pub fn rule_type(&self) -> RuleType {
                match self {
                    $( Kind::$variant => RuleType::$rule, )*
                }
            }
        }
    };
}

kinds! {
    AndroidBinary => ("android_binary", Android, Binary),
    AndroidLibrary => ("android_library", Android, Library),
    AndroidTest => ("android_test", Android, Test),
    AndroidRobolectricTest => ("android_robolectric_test", Android, Test),
    AndroidSdk => ("android_sdk", Android, Unknown),
    AarImport => ("aar_import", Android, Library),
    JavaLibrary => ("java_library", Java, Library),
    JavaTest => ("java_test", Java, Test),
    JavaBinary => ("java_binary", Java, Binary),
    JavaImport => ("java_import", Java, Library),
    JavaToolchain => ("java_toolchain", Java, Unknown),
    JavaProtoLibrary => ("java_proto_library", Java, Library),
    JavaLiteProtoLibrary => ("java_lite_proto_library", Java, Library),
    JavaWrapCc => ("java_wrap_cc", Java, Library),
    JavaPlugin => ("java_plugin", Java, Library),
    ProtoLibrary => ("proto_library", Proto, Library),
    CcLibrary => ("cc_library", C, Library),
    CcBinary => ("cc_binary", C, Binary),
    CcTest => ("cc_test", C, Test),
    CcIncLibrary => ("cc_inc_library", C, Library),
    CcToolchain => ("cc_toolchain", C, Unknown),
    CcToolchainSuite => ("cc_toolchain_suite", C, Unknown),
    PyLibrary => ("py_library", Python, Library),
    PyBinary => ("py_binary", Python, Binary),
    PyTest => ("py_test", Python, Test),
    PyAppengineBinary => ("py_appengine_binary", Python, Binary),
    GenRule => ("genrule", Generic, Unknown),
    ShTest => ("sh_test", Generic, Test),
    TestSuite => ("test_suite", Generic, Test),
}

impl Kind {
    pub fn is_test(&self) -> bool {
        self.rule_type() == RuleType::Test
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Kind {
    type Error = ApiError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Kind::from_kind_string(&value).ok_or(ApiError::UnknownKind(value))
    }
}

impl From<Kind> for &'static str {
    fn from(kind: Kind) -> Self {
        kind.as_str()
    }
}
