//! Progress table rendering.
//!
//! Output format:
//!
//! ```text
//! 00 01 02 03 04 05 06 07 08 09 10 11 12 13 14 15 16 17 18 19 20
//! Levels
//!  -  +  +  +  -  -  -  -  -  -  -  -  -  -  -  -  -  -  -  -  -
//! ```
//!
//! Each marker is three characters wide so it lines up with the header.
//! Colors come from a [`MarkerStyle`], so a plain backend can be used where
//! escape codes are unwanted.

use std::io::Write;

use owo_colors::OwoColorize;

use crate::error::Result;
use crate::extract::FeatureArray;
use crate::layout::{Feature, LEVEL_SLOTS, View};
use crate::save::SaveBuffer;

/// State of one slot under a mask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Set,
    Unset,
}

impl Marker {
    pub fn from_bit(set: bool) -> Self {
        if set { Self::Set } else { Self::Unset }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Self::Set => " + ",
            Self::Unset => " - ",
        }
    }
}

/// Turns a marker into printable text
pub trait MarkerStyle {
    fn paint(&self, marker: Marker) -> String;
}

/// Green for set, white for unset. Each marker resets the color after itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiStyle;

impl MarkerStyle for AnsiStyle {
    fn paint(&self, marker: Marker) -> String {
        match marker {
            Marker::Set => marker.text().green().to_string(),
            Marker::Unset => marker.text().white().to_string(),
        }
    }
}

/// No escape codes
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyle;

impl MarkerStyle for PlainStyle {
    fn paint(&self, marker: Marker) -> String {
        marker.text().to_string()
    }
}

pub struct Renderer<S> {
    style: S,
}

impl<S: MarkerStyle> Renderer<S> {
    pub fn new(style: S) -> Self {
        Self { style }
    }

    /// Slot numbers 00 to 20
    pub fn write_header<W: Write>(&self, out: &mut W) -> Result<()> {
        for i in 0..LEVEL_SLOTS {
            write!(out, "{:02} ", i)?;
        }
        writeln!(out)?;
        Ok(())
    }

    /// Label line followed by one masked marker row
    pub fn write_view<W: Write>(&self, out: &mut W, view: View, slots: &[u8]) -> Result<()> {
        writeln!(out, "{}", view.label)?;
        let row: String = slots
            .iter()
            .map(|b| self.style.paint(Marker::from_bit(b & view.mask != 0)))
            .collect();
        writeln!(out, "{}", row)?;
        Ok(())
    }

    /// Every view of one feature
    pub fn write_feature<W: Write>(&self, out: &mut W, array: &FeatureArray) -> Result<()> {
        for view in array.feature().views() {
            self.write_view(out, *view, array.slots())?;
        }
        Ok(())
    }

    /// Header, then each feature extracted and written in print order.
    ///
    /// Output is flushed after every feature, so rows written before an
    /// extraction failure stay in `out`.
    pub fn write_save<W: Write>(
        &self,
        out: &mut W,
        save: &SaveBuffer,
    ) -> Result<Vec<FeatureArray>> {
        self.write_header(out)?;
        let mut arrays = Vec::new();
        for feature in Feature::all() {
            let array = feature.read(save)?;
            self.write_feature(out, &array)?;
            out.flush()?;
            arrays.push(array);
        }
        Ok(arrays)
    }
}

impl Default for Renderer<AnsiStyle> {
    fn default() -> Self {
        Self::new(AnsiStyle)
    }
}
