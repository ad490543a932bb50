use std::path::Path;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use seafield::animate::FrameInfo;
use seafield::{DumpKind, FieldDump, Grid};

/// Parses a dump and reconstructs its grid.
pub(crate) fn load_grid<P>(path: P, kind: DumpKind) -> anyhow::Result<(FieldDump, Grid)>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let dump = FieldDump::from_path(path, kind)
        .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))?;
    let grid = Grid::from_rows(&dump.rows)
        .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))?;
    Ok((dump, grid))
}

/// Frame dimensions given as `WIDTHxHEIGHT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CliFrameSize(pub(crate) u32, pub(crate) u32);

impl FromStr for CliFrameSize {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        static RE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(
                r"(?x)      # insignificant whitespace mode
                ^
                ([0-9]+)    # width
                x           # separator
                ([0-9]+)    # height
                $",
            )
            .unwrap()
        });
        let cap = RE.captures(s).ok_or_else(|| {
            anyhow::anyhow!("frame size must be specified as 'WIDTHxHEIGHT', e.g. '1600x960'")
        })?;
        let width = cap.get(1).unwrap();
        let width = u32::from_str(width.as_str())?;
        let height = cap.get(2).unwrap();
        let height = u32::from_str(height.as_str())?;
        if width == 0 || height == 0 {
            anyhow::bail!("frame dimensions must be non-zero");
        }
        Ok(Self(width, height))
    }
}

/// Progress callback printing one styled line per rendered frame.
pub(crate) fn frame_progress() -> impl FnMut(FrameInfo) {
    let dim = console::Style::new().dim();
    let cyan = console::Style::new().cyan();
    move |info: FrameInfo| {
        let name = info
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| info.path.display().to_string());
        eprintln!(
            "{} {}",
            dim.apply_to(format!("[{:>4}/{}]", info.index + 1, info.total)),
            cyan.apply_to(name),
        );
    }
}

macro_rules! module_component {
    () => {
        module_path!().split("::").last().unwrap_or("")
    };
}
pub(crate) use module_component;
