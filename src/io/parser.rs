use crate::core::structure::{Atom, Bond, Structure};
use crate::io::error::Mol2Error;
use nalgebra::Vector3;
use std::fs;
use std::path::Path;

/// Parses a float field from a MOL2 record, tagging failures with the line number.
fn parse_float(line: usize, s: &str) -> Result<f64, Mol2Error> {
    s.parse::<f64>()
        .map_err(|_| Mol2Error::parse(line, format!("failed to parse '{}' as float", s)))
}

fn parse_count(line: usize, s: &str, what: &str) -> Result<usize, Mol2Error> {
    s.parse::<usize>()
        .map_err(|_| Mol2Error::parse(line, format!("failed to parse {} '{}'", what, s)))
}

/// Best-effort element symbol: leading letters of the atom name, falling back
/// to the SYBYL type stem ("C.3" -> "C").
fn element_of(name: &str, atom_type: &str) -> String {
    let from_name: String = name
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect();
    if !from_name.is_empty() {
        return from_name;
    }
    atom_type.split('.').next().unwrap_or(atom_type).to_string()
}

/// Parses a TRIPOS MOL2 file into a `Structure`.
///
/// Handles the MOLECULE, ATOM and BOND sections; any other section is
/// skipped. Only the first molecule in the file is read.
pub fn from_mol2(path: &Path) -> Result<Structure, Mol2Error> {
    let contents = fs::read_to_string(path).map_err(|source| Mol2Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_mol2(&contents)
}

/// Parses MOL2 text into a `Structure`. See [`from_mol2`].
pub fn parse_mol2(contents: &str) -> Result<Structure, Mol2Error> {
    let lines: Vec<&str> = contents.lines().collect();

    // Locate the MOLECULE header; everything before it (comments, blank
    // lines) is ignored.
    let mut i = 0;
    while i < lines.len() && lines[i].trim() != "@<TRIPOS>MOLECULE" {
        i += 1;
    }
    if i == lines.len() {
        return Err(Mol2Error::parse(0, "missing @<TRIPOS>MOLECULE section"));
    }

    // Line 1: molecule name
    i += 1;
    let name = lines
        .get(i)
        .map(|l| l.trim().to_string())
        .ok_or_else(|| Mol2Error::parse(i + 1, "expected molecule name"))?;

    // Line 2: counts (num_atoms num_bonds [num_subst ...])
    i += 1;
    let counts_line = lines
        .get(i)
        .ok_or_else(|| Mol2Error::parse(i + 1, "expected counts line"))?;
    let counts: Vec<&str> = counts_line.split_whitespace().collect();
    if counts.is_empty() {
        return Err(Mol2Error::parse(i + 1, "empty counts line"));
    }
    let n_atoms = parse_count(i + 1, counts[0], "atom count")?;
    let n_bonds = match counts.get(1) {
        Some(s) => parse_count(i + 1, s, "bond count")?,
        None => 0,
    };

    let mut structure = Structure::new(name);
    structure.atoms.reserve(n_atoms);
    structure.bonds.reserve(n_bonds);

    // Scan the remaining sections
    while i < lines.len() {
        let line = lines[i].trim();
        match line {
            "@<TRIPOS>ATOM" => {
                i += 1;
                while i < lines.len() && structure.atoms.len() < n_atoms {
                    let raw = lines[i].trim();
                    if raw.starts_with("@<TRIPOS>") {
                        break;
                    }
                    if !raw.is_empty() {
                        structure.atoms.push(parse_atom_row(i + 1, raw)?);
                    }
                    i += 1;
                }
                if structure.atoms.len() < n_atoms {
                    return Err(Mol2Error::parse(
                        i,
                        format!(
                            "expected {} atom records, found {}",
                            n_atoms,
                            structure.atoms.len()
                        ),
                    ));
                }
            }
            "@<TRIPOS>BOND" => {
                i += 1;
                while i < lines.len() && structure.bonds.len() < n_bonds {
                    let raw = lines[i].trim();
                    if raw.starts_with("@<TRIPOS>") {
                        break;
                    }
                    if !raw.is_empty() {
                        structure.bonds.push(parse_bond_row(i + 1, raw, n_atoms)?);
                    }
                    i += 1;
                }
                if structure.bonds.len() < n_bonds {
                    return Err(Mol2Error::parse(
                        i,
                        format!(
                            "expected {} bond records, found {}",
                            n_bonds,
                            structure.bonds.len()
                        ),
                    ));
                }
            }
            _ => i += 1,
        }
    }

    if structure.atoms.len() != n_atoms {
        return Err(Mol2Error::parse(0, "missing @<TRIPOS>ATOM section"));
    }

    Ok(structure)
}

/// Atom record: id name x y z type [subst_id [subst_name [charge]]]
fn parse_atom_row(line: usize, raw: &str) -> Result<Atom, Mol2Error> {
    let parts: Vec<&str> = raw.split_whitespace().collect();
    if parts.len() < 6 {
        return Err(Mol2Error::parse(
            line,
            format!("atom record has {} fields, expected at least 6", parts.len()),
        ));
    }

    let name = parts[1].to_string();
    let x = parse_float(line, parts[2])?;
    let y = parse_float(line, parts[3])?;
    let z = parse_float(line, parts[4])?;
    let atom_type = parts[5].to_string();
    let subst_id = match parts.get(6) {
        Some(s) => parse_count(line, s, "substructure id")?,
        None => 1,
    };
    let subst_name = parts.get(7).unwrap_or(&"UNK").to_string();
    let partial_charge = match parts.get(8) {
        Some(s) => parse_float(line, s)?,
        None => 0.0,
    };

    Ok(Atom {
        element: element_of(&name, &atom_type),
        name,
        position: Vector3::new(x, y, z),
        atom_type,
        partial_charge,
        subst_id,
        subst_name,
    })
}

/// Bond record: id origin_atom target_atom order
fn parse_bond_row(line: usize, raw: &str, n_atoms: usize) -> Result<Bond, Mol2Error> {
    let parts: Vec<&str> = raw.split_whitespace().collect();
    if parts.len() < 4 {
        return Err(Mol2Error::parse(
            line,
            format!("bond record has {} fields, expected at least 4", parts.len()),
        ));
    }

    let a = parse_count(line, parts[1], "bond origin")?;
    let b = parse_count(line, parts[2], "bond target")?;
    if a == 0 || b == 0 || a > n_atoms || b > n_atoms {
        return Err(Mol2Error::parse(
            line,
            format!("bond references atom out of range: {} {}", a, b),
        ));
    }

    Ok(Bond {
        a: a - 1,
        b: b - 1,
        order: parts[3].to_string(),
    })
}
