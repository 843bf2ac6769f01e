use serde::Serialize;
use serde_json;
use std::fs::File;
use std::path::Path;

use crate::params::SimParams;

#[derive(Serialize)]
pub struct RunConfig {
    pub model: ModelConfig,
    pub field: FieldConfig,
    pub numerics: NumericsConfig,
    pub run: RunInfo,
}

#[derive(Serialize)]
pub struct ModelConfig {
    pub lambda: f64,
    pub q: f64,
}

#[derive(Serialize)]
pub struct FieldConfig {
    pub kind: String,
    pub ex: f64,
    pub ez: f64,
    pub bz: f64,
    pub qc: f64,
}

#[derive(Serialize)]
pub struct NumericsConfig {
    pub integrator: String,
    /// Fixed timestep; this solver has no adaptivity.
    pub dt: f64,
    pub t_total: f64,
    pub output_stride: usize,
    pub shell_floor: f64,
}

#[derive(Serialize)]
pub struct RunInfo {
    pub binary: String,
    pub run_index: u32,
}

impl RunConfig {
    /// Snapshot of the parameters a run was started with.
    pub fn from_params(binary: &str, params: &SimParams) -> Self {
        Self {
            model: ModelConfig {
                lambda: params.lambda,
                q: params.q,
            },
            field: FieldConfig {
                kind: params.field.as_str().to_string(),
                ex: params.ex,
                ez: params.ez,
                bz: params.bz,
                qc: params.qc,
            },
            numerics: NumericsConfig {
                integrator: "rk4".to_string(),
                dt: params.dt,
                t_total: params.t_total,
                output_stride: params.save_every,
                shell_floor: params.shell_floor,
            },
            run: RunInfo {
                binary: binary.to_string(),
                run_index: params.run_index,
            },
        }
    }

    pub fn write_to_dir(&self, out_dir: &Path) -> std::io::Result<()> {
        let path = out_dir.join("config.json");
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}
