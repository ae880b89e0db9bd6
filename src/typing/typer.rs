use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::core::connectivity::BondGraph;
use crate::core::structure::Structure;
use crate::typing::convert::{FragmentConverter, TypingInput};
use crate::typing::error::TypingError;
use crate::typing::style::AtomTypeStyle;
use crate::typing::tools::Antechamber;

/// Fixed file names inside the per-call working directory.
pub const INPUT_FILE: &str = "ante_in.mol2";
pub const OUTPUT_FILE: &str = "ante_out.mol2";
/// Written one level above the working directory on failure.
pub const ERROR_LOG: &str = "ante_errorlog.txt";

/// One atom-typing request: the style plus the molecule's electronic state.
#[derive(Debug, Clone)]
pub struct TypingRequest {
    pub style: AtomTypeStyle,
    /// Net charge of the molecule.
    pub net_charge: f64,
    /// Spin multiplicity, 2S + 1.
    pub multiplicity: u32,
}

impl TypingRequest {
    pub fn new(style: AtomTypeStyle) -> Self {
        Self {
            style,
            net_charge: 0.0,
            multiplicity: 1,
        }
    }

    /// The antechamber argument vector, in the order the tool documents:
    /// input, output, style, net charge, multiplicity, verbosity. Net charge
    /// and multiplicity are always passed, defaults included.
    pub fn to_args(&self) -> Vec<String> {
        vec![
            "-i".to_string(),
            INPUT_FILE.to_string(),
            "-fi".to_string(),
            "mol2".to_string(),
            "-o".to_string(),
            OUTPUT_FILE.to_string(),
            "-fo".to_string(),
            "mol2".to_string(),
            "-at".to_string(),
            self.style.as_str().to_string(),
            "-nc".to_string(),
            self.net_charge.to_string(),
            "-m".to_string(),
            self.multiplicity.to_string(),
            "-s".to_string(),
            "2".to_string(),
        ]
    }
}

/// The bridge: one atom-typing round trip through external antechamber.
///
/// Owns the tool handle, the optional fragment converter and the optional
/// error-log destination. Each call works in its own scoped temporary
/// directory, which is removed on every exit path.
pub struct AtomTyper {
    antechamber: Antechamber,
    converter: Option<Box<dyn FragmentConverter>>,
    error_log: Option<PathBuf>,
}

impl AtomTyper {
    /// Builds a typer around antechamber found on the search path.
    pub fn discover() -> Result<Self, TypingError> {
        Ok(Self::with_tool(Antechamber::discover()?))
    }

    /// Builds a typer around an explicitly located tool.
    pub fn with_tool(antechamber: Antechamber) -> Self {
        Self {
            antechamber,
            converter: None,
            error_log: None,
        }
    }

    /// Registers the capability to accept `Fragment` inputs.
    pub fn with_converter(mut self, converter: Box<dyn FragmentConverter>) -> Self {
        self.converter = Some(converter);
        self
    }

    /// Overrides where antechamber's output is logged on failure. The default
    /// destination is `ante_errorlog.txt` next to the per-call temporary
    /// directory, which matches where the log lands while the working-directory
    /// scope is active.
    pub fn with_error_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.error_log = Some(path.into());
        self
    }

    /// Assigns atom types by round-tripping the molecule through antechamber.
    ///
    /// # Arguments
    /// * `input` - The molecule to type, as a structure or convertible fragment.
    /// * `request` - Style, net charge and multiplicity for the run.
    ///
    /// # Returns
    /// A new, fully independent structure with per-atom type labels populated;
    /// the input is never mutated.
    pub fn assign_atom_types(
        &self,
        input: TypingInput<'_>,
        request: &TypingRequest,
    ) -> Result<Structure, TypingError> {
        // 1. Tool check (re-asserted per call, before any other work)
        self.antechamber.ensure_available()?;

        // 2. Normalize the input to the canonical structure type
        let molecule = self.normalize(input)?;

        // 3. Confirm a single connected molecule.
        // Missing connectivity shows up here too: atoms with no bonds are
        // isolated components.
        let graph = BondGraph::from_structure(&molecule);
        if !graph.is_single_molecule() {
            return Err(TypingError::Disconnected {
                components: graph.find_connected_components().len(),
            });
        }

        // 4. Work within a scoped temporary directory to clean up after
        // antechamber; the Drop guard removes it on every exit path.
        let workdir = TempDir::new().map_err(TypingError::Workdir)?;

        // 5. Serialize and invoke
        molecule.save(&workdir.path().join(INPUT_FILE))?;
        let output = self.antechamber.run(workdir.path(), request.to_args())?;

        // 6. Inspect stdout and exit status for failure signals
        let stdout = String::from_utf8_lossy(&output.stdout);
        if stdout.contains("ERROR") || !output.status.success() {
            let log = self.error_log_path(workdir.path());
            fs::write(&log, stdout.as_bytes()).map_err(TypingError::Workdir)?;
            return Err(TypingError::ExternalTool { log });
        }

        // 7. Read back the typed molecule
        let typed = Structure::load(&workdir.path().join(OUTPUT_FILE))?;
        Ok(typed)
    }

    /// Resolves the input to a structure, converting fragments when the
    /// capability is registered and rejecting them when it is not.
    fn normalize<'a>(&self, input: TypingInput<'a>) -> Result<Cow<'a, Structure>, TypingError> {
        let kind = input.kind();
        match input {
            TypingInput::Structure(structure) => Ok(Cow::Borrowed(structure)),
            TypingInput::Fragment(fragment) => match &self.converter {
                Some(converter) => Ok(Cow::Owned(converter.convert(fragment)?)),
                None => Err(TypingError::UnsupportedInput { received: kind }),
            },
        }
    }

    fn error_log_path(&self, workdir: &Path) -> PathBuf {
        match &self.error_log {
            Some(path) => path.clone(),
            None => workdir
                .parent()
                .map(|parent| parent.join(ERROR_LOG))
                .unwrap_or_else(|| PathBuf::from(ERROR_LOG)),
        }
    }
}
