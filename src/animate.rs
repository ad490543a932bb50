//! Animation runs: walking a dump directory, rendering the selected
//! frames and feeding them to the video encoder.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cadence::{CadencePolicy, SnapshotPolicy};
use crate::{
    render, DumpKind, FieldDump, Frame, Grid, Profile, ScalarField, VectorMode, VideoWriter,
    VizError, CURRENTS,
};

/// Knobs of an animation run. `None` fields fall back to the profile.
#[derive(Debug, Clone, Default)]
pub struct AnimateOptions {
    pub fps: Option<u32>,
    pub stride: Option<usize>,
    /// Directory receiving PNG snapshots of dense-period frames; no
    /// snapshots are written when unset.
    pub snapshot_dir: Option<PathBuf>,
    /// Overrides the default dense-period file name patterns.
    pub dense_patterns: Option<Vec<String>>,
}

/// What an animation run produced.
#[derive(Debug, Clone)]
pub struct AnimateReport {
    pub output: PathBuf,
    pub frames: usize,
    pub snapshots: usize,
}

/// Per-frame progress, handed to the caller's callback before rendering.
#[derive(Debug, Clone, Copy)]
pub struct FrameInfo<'a> {
    /// 0-based index among the selected frames.
    pub index: usize,
    /// Number of selected frames.
    pub total: usize,
    pub path: &'a Path,
}

/// Renders a scalar field animation from the dumps in `data_dir`.
pub fn animate_scalar(
    field: ScalarField,
    data_dir: &Path,
    out_path: &Path,
    options: &AnimateOptions,
    mut progress: impl FnMut(FrameInfo),
) -> Result<AnimateReport, VizError> {
    let profile = field.profile();
    let run = AnimationRun::prepare(data_dir, out_path, profile, profile.id, options)?;
    run.execute(
        |path, frame| {
            let dump = FieldDump::from_path(path, DumpKind::Scalar)?;
            let grid = Grid::from_rows(&dump.rows)?;
            render::render_scalar(frame, &grid, profile, &dump.timestamp.date)?;
            Ok(dump.timestamp.date)
        },
        &mut progress,
    )
}

/// Renders a current animation, pairing each zonal dump with the
/// like-named file in `meridional_dir`.
pub fn animate_vector(
    mode: VectorMode,
    zonal_dir: &Path,
    meridional_dir: &Path,
    out_path: &Path,
    options: &AnimateOptions,
    mut progress: impl FnMut(FrameInfo),
) -> Result<AnimateReport, VizError> {
    let profile = &CURRENTS;
    let run = AnimationRun::prepare(zonal_dir, out_path, profile, mode.tag(), options)?;
    run.execute(
        |path, frame| {
            let file_name = path.file_name().ok_or_else(|| {
                VizError::OperationError(format!("not a file: {}", path.display()))
            })?;
            let meridional_path = meridional_dir.join(file_name);

            let zonal = FieldDump::from_path(path, DumpKind::Vector)?;
            let meridional = FieldDump::from_path(&meridional_path, DumpKind::Vector)
                .map_err(|e| with_path(&meridional_path, e.into()))?;
            let u = Grid::from_rows(&zonal.rows)?;
            let v = Grid::from_rows(&meridional.rows)?;
            let magnitude = Grid::magnitude(&u, &v)?;
            render::render_vector(frame, &u, &v, &magnitude, mode, &zonal.timestamp.date)?;
            Ok(zonal.timestamp.date)
        },
        &mut progress,
    )
}

/// Regular files with a `.txt` extension, sorted by file name.
pub fn list_dump_files(dir: &Path) -> Result<Vec<PathBuf>, VizError> {
    let entries = fs::read_dir(dir).map_err(|e| with_path(dir, e.into()))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| with_path(dir, e.into()))?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

struct AnimationRun<'a> {
    files: Vec<PathBuf>,
    selected: Vec<usize>,
    out_path: &'a Path,
    profile: &'a Profile,
    /// Suffix distinguishing snapshot files (field id or viz mode tag).
    snapshot_tag: &'a str,
    fps: u32,
    snapshot_dir: Option<&'a Path>,
    snapshot_policy: SnapshotPolicy,
}

impl<'a> AnimationRun<'a> {
    fn prepare(
        data_dir: &Path,
        out_path: &'a Path,
        profile: &'a Profile,
        snapshot_tag: &'a str,
        options: &'a AnimateOptions,
    ) -> Result<Self, VizError> {
        let files = list_dump_files(data_dir)?;
        if files.is_empty() {
            return Err(VizError::OperationError(format!(
                "no dump files in {}",
                data_dir.display()
            )));
        }

        let stride = options.stride.unwrap_or(profile.stride);
        let cadence = match &options.dense_patterns {
            Some(patterns) => CadencePolicy::with_patterns(stride, patterns.iter().cloned()),
            None => CadencePolicy::new(stride),
        };
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap_or_default().to_string_lossy().into_owned())
            .collect();
        let selected = cadence.select(&names);

        if let Some(dir) = &options.snapshot_dir {
            fs::create_dir_all(dir).map_err(|e| with_path(dir, e.into()))?;
        }
        if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| with_path(parent, e.into()))?;
        }

        Ok(Self {
            files,
            selected,
            out_path,
            profile,
            snapshot_tag,
            fps: options.fps.unwrap_or(profile.fps),
            snapshot_dir: options.snapshot_dir.as_deref(),
            snapshot_policy: SnapshotPolicy::new(),
        })
    }

    fn execute(
        self,
        mut render_frame: impl FnMut(&Path, &mut Frame) -> Result<String, VizError>,
        progress: &mut impl FnMut(FrameInfo),
    ) -> Result<AnimateReport, VizError> {
        let (width, height) = self.profile.frame_size;
        let mut writer = VideoWriter::create(
            self.out_path,
            width,
            height,
            self.fps,
            Some(self.profile.title),
        )?;
        let mut frame = Frame::new(width, height);
        let mut snapshots = 0;

        let total = self.selected.len();
        for (index, &file_index) in self.selected.iter().enumerate() {
            let path = &self.files[file_index];
            progress(FrameInfo {
                index,
                total,
                path: path.as_path(),
            });

            let date = render_frame(path, &mut frame).map_err(|e| with_path(path, e))?;
            writer.write_frame(&frame)?;

            if let Some(dir) = self.snapshot_dir {
                if self.snapshot_policy.wants(&date) {
                    let day = date.split_whitespace().next().unwrap_or(&date);
                    let name = format!("{}_{}.png", day, self.snapshot_tag);
                    frame.write_png(dir.join(name))?;
                    snapshots += 1;
                }
            }
        }

        writer.finish()?;
        Ok(AnimateReport {
            output: self.out_path.to_path_buf(),
            frames: total,
            snapshots,
        })
    }
}

fn with_path(path: &Path, e: VizError) -> VizError {
    VizError::OperationError(format!("{}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::Write;

    use super::*;

    #[test]
    fn dump_files_are_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b_02_Jun_2004.txt", "a_01_Jun_2004.txt", "notes.md"] {
            File::create(dir.path().join(name))
                .unwrap()
                .write_all(b"")
                .unwrap();
        }
        let files = list_dump_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_owned())
            .collect();
        assert_eq!(names, vec!["a_01_Jun_2004.txt", "b_02_Jun_2004.txt"]);
    }

    #[test]
    fn missing_directory_is_a_contextual_error() {
        let err = list_dump_files(Path::new("/nonexistent/dumps")).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("/nonexistent/dumps"));
    }
}
