use nalgebra::Vector3;
use std::path::Path;

use crate::io::error::Mol2Error;
use crate::io::{parser, writer};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single atom as it appears in a MOL2 record.
///
/// `atom_type` starts out as whatever the source file carried (often just the
/// element or a SYBYL type) and is the field antechamber rewrites.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub name: String,
    pub element: String,
    pub position: Vector3<f64>,
    pub atom_type: String,
    pub partial_charge: f64,
    /// Substructure (residue) id, 1-indexed as in the file format.
    pub subst_id: usize,
    pub subst_name: String,
}

/// A bond between two atoms, referenced by their zero-based indices.
/// `order` keeps the MOL2 token verbatim ("1", "2", "3", "ar", "am", ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Bond {
    pub a: usize,
    pub b: usize,
    pub order: String,
}

/// An in-memory molecular structure: ordered atoms plus a bond list.
///
/// Atom indices are stable; the bond list refers to positions in `atoms`.
#[derive(Debug, Clone)]
pub struct Structure {
    pub name: String,
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
}

impl Structure {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            atoms: Vec::new(),
            bonds: Vec::new(),
        }
    }

    /// Appends an atom and returns its index.
    pub fn add_atom(&mut self, atom: Atom) -> usize {
        self.atoms.push(atom);
        self.atoms.len() - 1
    }

    pub fn add_bond(&mut self, a: usize, b: usize, order: impl Into<String>) {
        self.bonds.push(Bond {
            a,
            b,
            order: order.into(),
        });
    }

    /// The per-atom type labels, in atom order.
    pub fn atom_types(&self) -> Vec<&str> {
        self.atoms.iter().map(|a| a.atom_type.as_str()).collect()
    }

    /// Persists the structure as a TRIPOS MOL2 file.
    pub fn save(&self, path: &Path) -> Result<(), Mol2Error> {
        writer::to_mol2(self, path)
    }

    /// Reconstructs a structure from a TRIPOS MOL2 file.
    pub fn load(path: &Path) -> Result<Self, Mol2Error> {
        parser::from_mol2(path)
    }
}
