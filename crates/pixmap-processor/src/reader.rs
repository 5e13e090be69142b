//! The pixelmap reader: per-query grid assembly.

use crate::endmembers::EndmemberMap;
use crate::registry::EndmemberRegistry;
use domino_parser::{decode_sparse_grid, parse_pixinfo};
use pixmap_common::{GridSpec, PixelGrid, PixmapError, PixmapResult};
use std::path::{Path, PathBuf};
use tracing::info;

/// The variable whose grids are normalized into volume fractions.
const VOLUME_VARIABLE: &str = "vol";

/// Total-solids-volume file required for volume-fraction normalization.
const TOTAL_SOLIDS_FILE: &str = "V_solids";

/// Where a reader's endmember mapping comes from: a named preset resolved
/// against a registry, or a directly supplied map.
#[derive(Debug, Clone)]
pub enum EndmemberSource {
    Preset(String),
    Map(EndmemberMap),
}

impl EndmemberSource {
    pub fn preset(name: impl Into<String>) -> Self {
        EndmemberSource::Preset(name.into())
    }
}

impl From<EndmemberMap> for EndmemberSource {
    fn from(map: EndmemberMap) -> Self {
        EndmemberSource::Map(map)
    }
}

/// Reader for one pixelmap directory.
///
/// The `pixinfo` metadata is parsed once at construction; every
/// [`load_variable`](PixelMap::load_variable) call afterwards shares the
/// resulting [`GridSpec`] and endmember map read-only and returns a fresh
/// dense grid.
#[derive(Debug, Clone)]
pub struct PixelMap {
    dir: PathBuf,
    spec: GridSpec,
    endmembers: EndmemberMap,
}

impl PixelMap {
    /// Open a pixelmap directory, resolving presets against the builtin
    /// registry.
    pub fn open(dir: impl AsRef<Path>, source: EndmemberSource) -> PixmapResult<Self> {
        Self::open_with_registry(dir, source, &EndmemberRegistry::builtin())
    }

    /// Open a pixelmap directory with an explicit preset registry.
    pub fn open_with_registry(
        dir: impl AsRef<Path>,
        source: EndmemberSource,
        registry: &EndmemberRegistry,
    ) -> PixmapResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        let endmembers = match source {
            EndmemberSource::Preset(name) => registry
                .get(&name)
                .cloned()
                .ok_or(PixmapError::UnknownPreset(name))?,
            EndmemberSource::Map(map) => map,
        };
        let spec = parse_pixinfo(dir.join("pixinfo"))?;
        Ok(Self {
            dir,
            spec,
            endmembers,
        })
    }

    /// The grid geometry recovered from `pixinfo`.
    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// The mineral → endmember mapping supplied at construction.
    pub fn endmembers(&self) -> &EndmemberMap {
        &self.endmembers
    }

    /// Assemble the dense grid of `variable` for `mineral`.
    ///
    /// Sums the grids of every endmember file present for the mineral; an
    /// endmember whose file is not listed in the metadata contributes zero
    /// (the phase is simply absent from the stable assemblage there) and is
    /// logged at info level, not treated as an error.
    ///
    /// For `variable == "vol"` the sum is divided element-wise by the
    /// `V_solids` grid, turning mineral volume into a volume fraction of the
    /// total solids. `V_solids` must exist on disk; cells where it is zero
    /// come back non-finite.
    pub fn load_variable(&self, variable: &str, mineral: &str) -> PixmapResult<PixelGrid> {
        let group = self
            .endmembers
            .get(mineral)
            .ok_or_else(|| PixmapError::UnknownMineral(mineral.to_string()))?;

        let rows = self.spec.temperature_steps;
        let cols = self.spec.pressure_steps;
        let mut accumulator = PixelGrid::zeros(rows, cols);

        for file_name in group.file_names(variable) {
            if !self.spec.contains_file(&file_name) {
                info!(
                    file = %file_name,
                    dir = %self.dir.display(),
                    "pixelmap not found, skipping this endmember"
                );
                continue;
            }
            let grid = decode_sparse_grid(self.dir.join(&file_name), rows, cols)?;
            accumulator.add_assign(&grid);
        }

        if variable == VOLUME_VARIABLE {
            let total_path = self.dir.join(TOTAL_SOLIDS_FILE);
            if !total_path.is_file() {
                return Err(PixmapError::MissingRequiredFile(
                    TOTAL_SOLIDS_FILE.to_string(),
                ));
            }
            let total_volume = decode_sparse_grid(total_path, rows, cols)?;
            accumulator.div_assign(&total_volume);
        }

        Ok(accumulator)
    }
}
