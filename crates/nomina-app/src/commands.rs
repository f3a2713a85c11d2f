use std::io::{self, Write};

use nomina_core::CodeConverter;

use crate::state::AppState;

/// Print one translation. Returns whether one was found.
pub fn translate_once<W: Write>(
    state: &AppState,
    country: &str,
    language: &str,
    out: &mut W,
) -> io::Result<bool> {
    let Some(country) = state.resolve_country(country.trim()) else {
        writeln!(out, "Invalid country name: {country}")?;
        return Ok(false);
    };
    let Some(language) = state.resolve_language(language.trim()) else {
        writeln!(out, "Invalid language name: {language}")?;
        return Ok(false);
    };

    match state.translate(&country, &language) {
        Some(translation) => {
            writeln!(out, "{translation}")?;
            Ok(true)
        }
        None => {
            writeln!(out, "Translation not available.")?;
            Ok(false)
        }
    }
}

pub fn list_countries<W: Write>(state: &AppState, out: &mut W) -> io::Result<()> {
    for name in state.country_names() {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

/// Print every entry of a code table, in file order.
pub fn list_codes<W: Write>(table: &CodeConverter, out: &mut W) -> io::Result<()> {
    for entry in table.entries() {
        writeln!(out, "{}\t{}", entry.code, entry.name)?;
    }
    Ok(())
}

/// List languages for a country. Returns false if the country is unknown.
pub fn list_languages<W: Write>(state: &AppState, country: &str, out: &mut W) -> io::Result<bool> {
    let Some(country) = state.resolve_country(country.trim()) else {
        writeln!(out, "Invalid country name: {country}")?;
        return Ok(false);
    };

    for name in state.language_names(&country.code) {
        writeln!(out, "{name}")?;
    }
    Ok(true)
}
