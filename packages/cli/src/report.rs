//! Result rendering.
//!
//! Mirrors the classic console output: one line per axis that found a
//! common value, nothing for the axes that did not, then the end banner.

use std::io::{self, Write};

use phonofeat_algo::{AxisResults, ConsonantFeatures, VowelFeatures};

pub fn render<W: Write>(output: &mut W, results: &AxisResults) -> io::Result<()> {
    match results {
        AxisResults::Consonant(features) => render_consonants(output, features)?,
        AxisResults::Vowel(features) => render_vowels(output, features)?,
    }
    writeln!(output, "========END========")
}

pub fn render_json<W: Write>(output: &mut W, results: &AxisResults) -> io::Result<()> {
    let json = serde_json::to_string_pretty(results)?;
    writeln!(output, "{json}")
}

fn render_consonants<W: Write>(output: &mut W, features: &ConsonantFeatures) -> io::Result<()> {
    if let Some(place) = features.place {
        writeln!(output, "The common place of articulation is: {}", place.as_str())?;
    }
    if let Some(manner) = features.manner {
        writeln!(output, "The common manner of articulation is: {}", manner.as_str())?;
    }
    if let Some(voicing) = features.voicing {
        writeln!(output, "The common voicing is: {}", voicing.as_str())?;
    }
    Ok(())
}

fn render_vowels<W: Write>(output: &mut W, features: &VowelFeatures) -> io::Result<()> {
    if let Some(height) = features.height {
        writeln!(output, "The common height of the tongue is: {}", height.as_str())?;
    }
    if let Some(backness) = features.backness {
        writeln!(output, "The common backness of the tongue is: {}", backness.as_str())?;
    }
    if let Some(tenseness) = features.tenseness {
        writeln!(
            output,
            "The common tenseness of the vocal tract is: {}",
            tenseness.as_str()
        )?;
    }
    if let Some(roundedness) = features.roundedness {
        writeln!(
            output,
            "The common roundedness of the lips is: {}",
            roundedness.as_str()
        )?;
    }
    if let Some(shape) = features.shape {
        writeln!(output, "The common simple/complex vowel is: {}", shape.as_str())?;
    }
    Ok(())
}
