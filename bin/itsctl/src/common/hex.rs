//! Hex loading utilities for itsctl

use std::{fs, io::Read};

use alloy_primitives::{hex, Bytes};

use super::{ItsError, Result};

/// Load hex-encoded bytes from an argument or a file. If the file is a dash (-), read from stdin.
/// Priority: arg > file. Returns `None` if neither is provided.
pub fn load_hex(arg: Option<&str>, file: Option<&str>) -> Result<Option<Bytes>> {
    let hex_string = if let Some(arg) = arg {
        arg.to_string()
    } else if let Some(file) = file {
        if file == "-" {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        } else {
            fs::read_to_string(file)?
        }
    } else {
        return Ok(None);
    };

    decode_hex(&hex_string).map(|bytes| Some(Bytes::from(bytes)))
}

/// Decode hex string, handling optional 0x prefix
pub fn decode_hex(s: &str) -> Result<Vec<u8>> {
    let s = s.trim();
    let hex_str = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);

    if hex_str.len() % 2 != 0 {
        return Err(ItsError::InvalidInput(format!(
            "Invalid hex string length: {} (must be even)",
            hex_str.len()
        )));
    }

    Ok(hex::decode(hex_str)?)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_decode_hex() {
        assert_eq!(decode_hex("0x0102").unwrap(), vec![1, 2]);
        assert_eq!(decode_hex(" 0X0a\n").unwrap(), vec![10]);
        assert_eq!(decode_hex("").unwrap(), Vec::<u8>::new());
        assert!(matches!(decode_hex("0x123"), Err(ItsError::InvalidInput(_))));
        assert!(matches!(decode_hex("zz"), Err(ItsError::InvalidHex(_))));
    }

    #[test]
    fn test_load_hex_prefers_arg() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "0xbeef").unwrap();
        let path = file.path().to_str().unwrap();

        assert_eq!(load_hex(Some("0x01"), Some(path)).unwrap(), Some(Bytes::from(vec![1])));
        assert_eq!(load_hex(None, Some(path)).unwrap(), Some(Bytes::from(vec![0xbe, 0xef])));
        assert_eq!(load_hex(None, None).unwrap(), None);
    }
}
