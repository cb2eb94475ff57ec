// crates/imgpack-core/src/hdl/cascade.rs
//
// Palette lookup as data: one first-match chain per output signal.
// Text rendering lives in `vhdl`.

use crate::error::{PackError, Result};
use crate::hdl::binfield::bin_field;
use crate::video::encode::{PaletteEntry, CHROMA_BITS, INDEX_BITS, LUMA_BITS, PHASE_BITS};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Signal {
    Luma,
    Chroma,
    Phase,
}

impl Signal {
    /// Emission order in the generated architecture.
    pub const ALL: [Signal; 3] = [Signal::Luma, Signal::Chroma, Signal::Phase];

    pub fn name(self) -> &'static str {
        match self {
            Signal::Luma => "luma",
            Signal::Chroma => "chroma",
            Signal::Phase => "phase",
        }
    }

    pub fn width(self) -> u32 {
        match self {
            Signal::Luma => LUMA_BITS,
            Signal::Chroma => CHROMA_BITS,
            Signal::Phase => PHASE_BITS,
        }
    }

    fn value_of(self, e: &PaletteEntry) -> i64 {
        match self {
            Signal::Luma => e.luma as i64,
            Signal::Chroma => e.chroma as i64,
            Signal::Phase => e.phase as i64,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Literal {
    /// Integer converted at elaboration time: `conv_std_logic_vector(v, w)`.
    Conv { value: i64, width: u32 },
    /// Quoted bit string, already `width` digits long.
    Bits(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clause {
    pub literal: Literal,
    /// 4-bit index pattern; `None` on the final default clause.
    pub selector: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cascade {
    pub signal: Signal,
    pub clauses: Vec<Clause>,
}

impl Cascade {
    pub fn conditional_count(&self) -> usize {
        self.clauses.iter().filter(|c| c.selector.is_some()).count()
    }
}

/// Build one signal's chain in palette index order.
///
/// The last entry carries no selector so the lookup is total over all 16 index values.
pub fn build_cascade(signal: Signal, entries: &[PaletteEntry]) -> Result<Cascade> {
    if entries.is_empty() {
        return Err(PackError::EmptyPalette);
    }

    let last = entries.len() - 1;
    let mut clauses = Vec::with_capacity(entries.len());
    for (pos, e) in entries.iter().enumerate() {
        let value = signal.value_of(e);
        let literal = match signal {
            Signal::Luma => {
                // range check only; the literal itself is decimal
                bin_field(value, LUMA_BITS)?;
                Literal::Conv {
                    value,
                    width: LUMA_BITS,
                }
            }
            Signal::Chroma | Signal::Phase => Literal::Bits(bin_field(value, signal.width())?),
        };

        let selector = if pos == last {
            None
        } else {
            Some(bin_field(e.index as i64, INDEX_BITS)?)
        };

        clauses.push(Clause { literal, selector });
    }

    Ok(Cascade { signal, clauses })
}

/// Luma, chroma and phase chains, in that order.
pub fn build_cascades(entries: &[PaletteEntry]) -> Result<[Cascade; 3]> {
    Ok([
        build_cascade(Signal::Luma, entries)?,
        build_cascade(Signal::Chroma, entries)?,
        build_cascade(Signal::Phase, entries)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(index: u8, luma: u16, chroma: u8, phase: i16) -> PaletteEntry {
        PaletteEntry {
            index,
            luma,
            chroma,
            phase,
        }
    }

    #[test]
    fn last_clause_is_default() {
        let es = [entry(0, 278, 7, -43), entry(1, 1301, 7, -43), entry(2, 584, 0, -43)];
        let c = build_cascade(Signal::Chroma, &es).unwrap();
        assert_eq!(c.clauses.len(), 3);
        assert_eq!(c.conditional_count(), 2);
        assert_eq!(c.clauses[0].selector.as_deref(), Some("0000"));
        assert_eq!(c.clauses[1].selector.as_deref(), Some("0001"));
        assert_eq!(c.clauses[2].selector, None);
        assert_eq!(c.clauses[2].literal, Literal::Bits("000".into()));
    }

    #[test]
    fn luma_uses_runtime_width_conversion() {
        let c = build_cascade(Signal::Luma, &[entry(0, 1301, 7, 0)]).unwrap();
        assert_eq!(
            c.clauses[0].literal,
            Literal::Conv {
                value: 1301,
                width: 11
            }
        );
    }

    #[test]
    fn out_of_width_value_is_fatal() {
        let bad = [entry(0, 4096, 7, 0)];
        assert!(matches!(
            build_cascade(Signal::Luma, &bad),
            Err(PackError::FieldOverflow { value: 4096, width: 11 })
        ));
    }

    #[test]
    fn empty_is_rejected() {
        assert!(matches!(build_cascades(&[]), Err(PackError::EmptyPalette)));
    }
}
