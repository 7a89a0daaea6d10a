//! Text encodings understood by the buffer loader.
//!
//! Decoding is strict: the first malformed byte sequence aborts the decode
//! with [`Error::Decode`] carrying its byte offset. There is no replacement
//! character substitution and no encoding detection.

use core::fmt;
use core::str::FromStr;

use crate::Error;

/// A text encoding used to turn file bytes into UTF-16 code units.
///
/// | Variant    | Label        | Notes                                        |
/// |------------|--------------|----------------------------------------------|
/// | `Utf8`     | `UTF-8`      | Default. A leading BOM is kept as `U+FEFF`.  |
/// | `Utf16`    | `UTF-16`     | Honors a BOM, big-endian without one.        |
/// | `Utf16Le`  | `UTF-16LE`   | BOM is kept as `U+FEFF`.                     |
/// | `Utf16Be`  | `UTF-16BE`   | BOM is kept as `U+FEFF`.                     |
/// | `Latin1`   | `ISO-8859-1` | Every byte maps to the code point of equal value. |
/// | `Ascii`    | `US-ASCII`   | Bytes above `0x7F` are rejected.             |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum Encoding {
    #[default]
    Utf8,
    Utf16,
    Utf16Le,
    Utf16Be,
    Latin1,
    Ascii,
}

impl Encoding {
    /// All supported encodings.
    pub const ALL: [Encoding; 6] = [
        Encoding::Utf8,
        Encoding::Utf16,
        Encoding::Utf16Le,
        Encoding::Utf16Be,
        Encoding::Latin1,
        Encoding::Ascii,
    ];

    /// Canonical label, as accepted by [`FromStr`].
    pub const fn label(self) -> &'static str {
        match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Utf16 => "UTF-16",
            Encoding::Utf16Le => "UTF-16LE",
            Encoding::Utf16Be => "UTF-16BE",
            Encoding::Latin1 => "ISO-8859-1",
            Encoding::Ascii => "US-ASCII",
        }
    }

    /// Decodes `bytes` into a `String`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] with the offset of the first byte that is not
    /// valid in this encoding.
    pub fn decode(self, bytes: &[u8]) -> Result<String, Error> {
        match self {
            Encoding::Utf8 => match core::str::from_utf8(bytes) {
                Ok(text) => Ok(text.to_owned()),
                Err(err) => Err(self.error_at(err.valid_up_to())),
            },
            Encoding::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
            Encoding::Ascii => {
                if let Some(offset) = bytes.iter().position(|b| !b.is_ascii()) {
                    return Err(self.error_at(offset));
                }
                Ok(bytes.iter().map(|&b| char::from(b)).collect())
            }
            Encoding::Utf16 | Encoding::Utf16Le | Encoding::Utf16Be => {
                // units are already validated, so nothing gets substituted
                self.utf16_units(bytes)
                    .map(|units| String::from_utf16_lossy(&units))
            }
        }
    }

    /// Decodes `bytes` into UTF-16 code units, the representation cursors
    /// index into.
    ///
    /// # Errors
    ///
    /// Same as [`Encoding::decode`].
    pub fn decode_utf16(self, bytes: &[u8]) -> Result<Vec<u16>, Error> {
        match self {
            Encoding::Utf16 | Encoding::Utf16Le | Encoding::Utf16Be => self.utf16_units(bytes),
            Encoding::Latin1 => Ok(bytes.iter().map(|&b| u16::from(b)).collect()),
            _ => Ok(self.decode(bytes)?.encode_utf16().collect()),
        }
    }

    /// Splits UTF-16 bytes into code units and checks surrogate pairing.
    fn utf16_units(self, bytes: &[u8]) -> Result<Vec<u16>, Error> {
        let (big_endian, skip) = match self {
            Encoding::Utf16Le => (false, 0),
            Encoding::Utf16Be => (true, 0),
            _ => match bytes {
                [0xFE, 0xFF, ..] => (true, 2),
                [0xFF, 0xFE, ..] => (false, 2),
                _ => (true, 0),
            },
        };

        let body = &bytes[skip..];
        if body.len() % 2 != 0 {
            return Err(self.error_at(bytes.len() - 1));
        }

        let units: Vec<u16> = body
            .chunks_exact(2)
            .map(|pair| {
                let pair = [pair[0], pair[1]];
                if big_endian {
                    u16::from_be_bytes(pair)
                } else {
                    u16::from_le_bytes(pair)
                }
            })
            .collect();

        let mut index = 0;
        for decoded in char::decode_utf16(units.iter().copied()) {
            match decoded {
                Ok(ch) => index += ch.len_utf16(),
                Err(_) => return Err(self.error_at(skip + index * 2)),
            }
        }

        Ok(units)
    }

    #[inline]
    fn error_at(self, offset: usize) -> Error {
        Error::Decode {
            encoding: self,
            offset,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Encoding {
    type Err = Error;

    /// Parses a label case-insensitively. Besides the canonical labels a few
    /// common aliases are accepted (`utf8`, `latin1`, `ascii`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_ascii_lowercase();
        let encoding = match label.as_str() {
            "utf-8" | "utf8" => Encoding::Utf8,
            "utf-16" | "utf16" => Encoding::Utf16,
            "utf-16le" | "utf16le" => Encoding::Utf16Le,
            "utf-16be" | "utf16be" => Encoding::Utf16Be,
            "iso-8859-1" | "iso8859-1" | "iso_8859_1" | "latin1" | "latin-1" => Encoding::Latin1,
            "us-ascii" | "ascii" => Encoding::Ascii,
            _ => return Err(Error::UnsupportedEncoding(s.to_owned())),
        };
        Ok(encoding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_default_is_utf8() {
        assert_eq!(Encoding::default(), Encoding::Utf8);
    }

    #[test]
    fn test_labels_round_trip() {
        for encoding in Encoding::ALL {
            assert_eq!(encoding.label().parse::<Encoding>().ok(), Some(encoding));
        }
    }

    #[test_case("utf8", Encoding::Utf8; "utf8 alias")]
    #[test_case("Latin1", Encoding::Latin1; "latin1 mixed case")]
    #[test_case(" ascii ", Encoding::Ascii; "padded ascii")]
    #[test_case("utf-16le", Encoding::Utf16Le; "lowercase utf16le")]
    fn test_aliases(label: &str, expected: Encoding) {
        assert_eq!(label.parse::<Encoding>().ok(), Some(expected));
    }

    #[test]
    fn test_unknown_label() {
        let err = "shift-jis".parse::<Encoding>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedEncoding(label) if label == "shift-jis"));
    }

    #[test]
    fn test_utf8_invalid_offset() {
        let err = Encoding::Utf8.decode(b"ab\xFFcd").unwrap_err();
        assert!(matches!(
            err,
            Error::Decode {
                encoding: Encoding::Utf8,
                offset: 2
            }
        ));
    }

    #[test]
    fn test_latin1_maps_high_bytes() {
        assert_eq!(Encoding::Latin1.decode(b"M\xFCller").unwrap(), "Müller");
        assert_eq!(
            Encoding::Latin1.decode_utf16(b"\xFC").unwrap(),
            vec![0x00FC]
        );
    }

    #[test]
    fn test_ascii_rejects_high_bytes() {
        assert_eq!(Encoding::Ascii.decode(b"plain").unwrap(), "plain");
        let err = Encoding::Ascii.decode(b"ab\x80").unwrap_err();
        assert!(matches!(err, Error::Decode { offset: 2, .. }));
    }

    #[test]
    fn test_utf16_variants() {
        assert_eq!(Encoding::Utf16Le.decode(b"h\0i\0").unwrap(), "hi");
        assert_eq!(Encoding::Utf16Be.decode(b"\0h\0i").unwrap(), "hi");
        // BOM selects the byte order and is dropped
        assert_eq!(Encoding::Utf16.decode(b"\xFF\xFEh\0i\0").unwrap(), "hi");
        assert_eq!(Encoding::Utf16.decode(b"\xFE\xFF\0h\0i").unwrap(), "hi");
        assert_eq!(Encoding::Utf16.decode(b"\0h\0i").unwrap(), "hi");
    }

    #[test]
    fn test_utf16_supplementary_units() {
        // U+1F600 as a surrogate pair, little-endian
        let units = Encoding::Utf16Le
            .decode_utf16(b"\x3D\xD8\x00\xDE")
            .unwrap();
        assert_eq!(units, vec![0xD83D, 0xDE00]);
    }

    #[test]
    fn test_utf16_odd_length() {
        let err = Encoding::Utf16Le.decode(b"h\0i").unwrap_err();
        assert!(matches!(err, Error::Decode { offset: 2, .. }));
    }

    #[test]
    fn test_utf16_unpaired_surrogate() {
        // 'a' then a lone high surrogate then 'b'
        let err = Encoding::Utf16Le
            .decode(b"a\0\x3D\xD8b\0")
            .unwrap_err();
        assert!(matches!(err, Error::Decode { offset: 2, .. }));

        let err = Encoding::Utf16.decode(b"\xFF\xFE\x3D\xD8").unwrap_err();
        assert!(matches!(err, Error::Decode { offset: 2, .. }));
    }

    #[test]
    fn test_utf8_units_split_surrogates() {
        let units = Encoding::Utf8.decode_utf16("a😀".as_bytes()).unwrap();
        assert_eq!(units, vec![0x61, 0xD83D, 0xDE00]);
    }
}
