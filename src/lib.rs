//! Synthetic PDB files: fixed-column `ATOM` records with uniformly random
//! positions and elements, meant as bulk test input for PDB readers.

use std::fmt;

use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

pub mod consts;
mod generate;

use consts::{coord_range, COORD_PRECISION, COORD_WIDTH};
pub use generate::{generate_file, generate_file_with, write_atoms};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Element {
    C,
    N,
    O,
    H,
    S,
    P,
}

impl Element {
    pub const ALL: [Element; 6] = [
        Element::C,
        Element::N,
        Element::O,
        Element::H,
        Element::S,
        Element::P,
    ];

    pub fn symbol(self) -> char {
        match self {
            Element::C => 'C',
            Element::N => 'N',
            Element::O => 'O',
            Element::H => 'H',
            Element::S => 'S',
            Element::P => 'P',
        }
    }

    pub fn from_symbol(c: char) -> Option<Element> {
        Element::ALL.into_iter().find(|e| e.symbol() == c)
    }

    pub fn random(rng: &mut impl Rng) -> Element {
        rng.gen()
    }
}

/// uniform over [`Element::ALL`]
impl Distribution<Element> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Element {
        Element::ALL[rng.gen_range(0..Element::ALL.len())]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Atom {
    pub element: Element,
    pub pos: [f64; 3],
}

impl Atom {
    pub fn random(rng: &mut impl Rng) -> Atom {
        let pos = [random_coord(rng), random_coord(rng), random_coord(rng)];
        let element = Element::random(rng);
        Atom { element, pos }
    }
}

/// Formats as a single `ATOM` record without the line terminator.
///
/// Serial number, atom name, residue and chain columns are left blank. With
/// in-range coordinates x, y and z land in columns 31-38, 39-46 and 47-54,
/// and the element symbol in column 78.
impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ATOM {:24} ", "")?;
        for c in self.pos {
            write!(f, "{:>w$.p$}", c, w = COORD_WIDTH, p = COORD_PRECISION)?;
        }
        write!(f, " {:22}{}  ", "", self.element.symbol())
    }
}

pub fn random_coord(rng: &mut impl Rng) -> f64 {
    rng.gen_range(coord_range())
}

/// Right aligns to at least [`COORD_WIDTH`] characters. Wider numbers grow the
/// field rather than being cut.
pub fn format_coord(coord: f64) -> String {
    format!("{:>w$.p$}", coord, w = COORD_WIDTH, p = COORD_PRECISION)
}

pub fn coord_field(rng: &mut impl Rng) -> String {
    format_coord(random_coord(rng))
}

pub fn atom_line(rng: &mut impl Rng) -> String {
    Atom::random(rng).to_string()
}
