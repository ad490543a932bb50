use std::io::Write;
use std::path::Path;
use std::process::{Child, ChildStdin, Command, Stdio};

use crate::{Frame, VideoError};

/// MP4 writer backed by an `ffmpeg` child process.
///
/// Frames are fed as raw RGB24 on the child's stdin and encoded to
/// `yuv420p`, one video frame per [`Frame`]. Dimensions are fixed at
/// creation; every frame must match.
///
/// # Example
/// ```no_run
/// use seafield::{Frame, VideoWriter};
///
/// let mut writer = VideoWriter::create("out.mp4", 1280, 640, 12, Some("currents"))?;
/// let frame = Frame::new(1280, 640);
/// writer.write_frame(&frame)?;
/// writer.finish()?;
/// # Ok::<(), seafield::VideoError>(())
/// ```
pub struct VideoWriter {
    child: Child,
    stdin: Option<ChildStdin>,
    frame_bytes: usize,
}

impl VideoWriter {
    /// Spawns the encoder. `title` is stored as container metadata.
    pub fn create<P>(
        path: P,
        width: u32,
        height: u32,
        fps: u32,
        title: Option<&str>,
    ) -> Result<Self, VideoError>
    where
        P: AsRef<Path>,
    {
        let mut command = Command::new("ffmpeg");
        command
            .arg("-y")
            .args(["-loglevel", "error"])
            .args(["-f", "rawvideo"])
            .args(["-pix_fmt", "rgb24"])
            .args(["-s", &format!("{width}x{height}")])
            .args(["-r", &fps.to_string()])
            .args(["-i", "-"])
            .args(["-pix_fmt", "yuv420p"]);
        if let Some(title) = title {
            command.args(["-metadata", &format!("title={title}")]);
        }
        command
            .arg(path.as_ref())
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit());

        let mut child = command
            .spawn()
            .map_err(|e| VideoError::EncoderSpawn(e.to_string()))?;
        let stdin = child.stdin.take();
        Ok(Self {
            child,
            stdin,
            frame_bytes: width as usize * height as usize * 3,
        })
    }

    pub fn write_frame(&mut self, frame: &Frame) -> Result<(), VideoError> {
        if frame.rgb().len() != self.frame_bytes {
            return Err(VideoError::FrameSizeMismatch {
                expected: self.frame_bytes,
                actual: frame.rgb().len(),
            });
        }
        match self.stdin.as_mut() {
            Some(stdin) => stdin.write_all(frame.rgb())?,
            None => return Err(VideoError::WriteError("encoder input closed".to_owned())),
        }
        Ok(())
    }

    /// Closes the encoder's input and waits for it to exit.
    pub fn finish(mut self) -> Result<(), VideoError> {
        drop(self.stdin.take());
        let status = self.child.wait()?;
        if status.success() {
            Ok(())
        } else {
            Err(VideoError::EncoderExited(status.code()))
        }
    }
}
