/// Package/class path of the managed-runtime peer, as written on the Java
/// side.
pub const PACKAGE: &str = "org.thunderdog.challegram.voip";

/// Prefix of every exported native entry point: `"Java_"` followed by
/// [`PACKAGE`] with each `.` replaced by `_`, and a trailing `_` continuing
/// the same identifier.
///
/// This is the string the export macros bake into `#[export_name]`. A test
/// derives it from [`PACKAGE`] so the constant cannot drift from the rule.
pub const SYMBOL_PREFIX: &str = "Java_org_thunderdog_challegram_voip_";

/// Error produced when a native method name cannot be turned into an
/// exported symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    /// The method name is empty.
    #[error("native method name is empty")]
    Empty,
    /// The method name starts with an ASCII digit.
    #[error("native method name starts with a digit")]
    LeadingDigit,
    /// The method name contains a character the exported symbol cannot carry
    /// verbatim.
    #[error("invalid character {ch:?} at byte {index} in native method name")]
    InvalidChar {
        /// The offending character.
        ch: char,
        /// Byte offset of the character within the method name.
        index: usize,
    },
}

/// Derive the exported symbol for `short_name`, exactly as the export macros
/// do: [`SYMBOL_PREFIX`] with the short name appended verbatim.
///
/// The short name must be non-empty ASCII alphanumeric and must not start
/// with a digit. Underscores are rejected here even though they are legal in
/// Java method names: the runtime's dynamic-symbol lookup escapes `_` as
/// `_1`, so a verbatim-pasted underscore would produce a symbol the loader
/// never asks for. Use [`mangled_export_name()`] to predict the symbol for
/// such names.
///
/// The derivation is injective: distinct short names always produce distinct
/// symbols, because the output is the fixed prefix plus the unmodified name.
///
/// # Errors
///
/// Returns a [`NameError`] describing the first rule the name violates.
pub fn exported_name(short_name: &str) -> Result<String, NameError> {
    validate_short_name(short_name)?;
    let mut symbol = String::with_capacity(SYMBOL_PREFIX.len() + short_name.len());
    symbol.push_str(SYMBOL_PREFIX);
    symbol.push_str(short_name);
    Ok(symbol)
}

/// Derive the symbol the runtime's loader resolves for `short_name`,
/// applying the native-method name mangling: ASCII alphanumerics pass
/// through, `_` becomes `_1`, and any other character becomes `_0xxxx` per
/// UTF-16 code unit (lowercase hex, four digits).
///
/// This is the lookup the VM performs for method names containing
/// underscores or non-ASCII characters. The export macros never emit such
/// symbols; this exists for tooling that has to match the loader's view.
///
/// # Errors
///
/// Returns [`NameError::Empty`] for an empty name and
/// [`NameError::LeadingDigit`] when the name starts with a digit.
pub fn mangled_export_name(short_name: &str) -> Result<String, NameError> {
    match short_name.chars().next() {
        None => return Err(NameError::Empty),
        Some(first) if first.is_ascii_digit() => return Err(NameError::LeadingDigit),
        Some(_) => {}
    }

    let mut symbol = String::with_capacity(SYMBOL_PREFIX.len() + short_name.len());
    symbol.push_str(SYMBOL_PREFIX);
    for ch in short_name.chars() {
        if ch.is_ascii_alphanumeric() {
            symbol.push(ch);
        } else if ch == '_' {
            symbol.push_str("_1");
        } else {
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                push_escaped_unit(&mut symbol, *unit);
            }
        }
    }
    Ok(symbol)
}

fn push_escaped_unit(symbol: &mut String, unit: u16) {
    symbol.push_str("_0");
    for shift in [12u32, 8, 4, 0] {
        let digit = (u32::from(unit) >> shift) & 0xf;
        // Always `Some` for a nibble.
        symbol.push(char::from_digit(digit, 16).unwrap_or('0'));
    }
}

fn validate_short_name(short_name: &str) -> Result<(), NameError> {
    let Some(first) = short_name.chars().next() else {
        return Err(NameError::Empty);
    };
    if first.is_ascii_digit() {
        return Err(NameError::LeadingDigit);
    }
    for (index, ch) in short_name.char_indices() {
        if !ch.is_ascii_alphanumeric() {
            return Err(NameError::InvalidChar { ch, index });
        }
    }
    Ok(())
}
