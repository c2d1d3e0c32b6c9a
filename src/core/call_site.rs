//! Call-site resolution for record headers
//!
//! Every emit primitive on [`Logger`](super::Logger) is `#[track_caller]`, so
//! the location of the code that called it is always known. A `depth` of 0
//! selects exactly that location. A wrapper that logs on behalf of its own
//! caller passes `depth = 1`, a wrapper of that wrapper passes `depth = 2`,
//! and so on; each level moves one frame further out from the immediate
//! caller of the depth-aware primitive.

use std::backtrace::Backtrace;
use std::panic::Location;

/// File recorded when the call site cannot be resolved
pub const UNKNOWN_FILE: &str = "???";
/// Line recorded when the call site cannot be resolved
pub const UNKNOWN_LINE: u32 = 1;

/// Source location attached to a record header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub file: String,
    pub line: u32,
}

impl CallSite {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    pub fn unknown() -> Self {
        Self::new(UNKNOWN_FILE, UNKNOWN_LINE)
    }
}

impl From<&Location<'_>> for CallSite {
    fn from(location: &Location<'_>) -> Self {
        Self::new(location.file(), location.line())
    }
}

/// Maps a stack depth to a call site
///
/// `caller` is the `#[track_caller]` location of the immediate caller of the
/// depth-aware primitive. Returning `None` makes the header fall back to
/// [`UNKNOWN_FILE`] / [`UNKNOWN_LINE`].
pub trait CallSiteResolver: Send + Sync {
    fn resolve(&self, depth: usize, caller: &'static Location<'static>) -> Option<CallSite>;
}

impl<F> CallSiteResolver for F
where
    F: Fn(usize, &'static Location<'static>) -> Option<CallSite> + Send + Sync,
{
    fn resolve(&self, depth: usize, caller: &'static Location<'static>) -> Option<CallSite> {
        self(depth, caller)
    }
}

/// Default resolver
///
/// Depth 0 is answered from the tracked caller location without touching the
/// stack. Deeper frames are found by capturing a backtrace, locating the
/// frame that contains the tracked location and walking `depth` frames
/// outwards. Builds without debug info resolve deeper frames to `None`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BacktraceResolver;

/// Maximum line distance between a tracked location and the backtrace line
/// of the same call, for calls whose arguments span several lines.
const ANCHOR_LINE_SLACK: u32 = 8;

impl CallSiteResolver for BacktraceResolver {
    fn resolve(&self, depth: usize, caller: &'static Location<'static>) -> Option<CallSite> {
        if depth == 0 {
            return Some(CallSite::from(caller));
        }

        let rendered = Backtrace::force_capture().to_string();
        let frames = parse_frames(&rendered);
        let anchor = find_anchor(&frames, caller)?;
        frames.get(anchor + depth).cloned()
    }
}

/// Extract `file:line` pairs from a rendered backtrace, innermost first
fn parse_frames(rendered: &str) -> Vec<CallSite> {
    rendered
        .lines()
        .filter_map(|line| line.trim_start().strip_prefix("at "))
        .filter_map(|location| {
            let mut parts = location.rsplitn(3, ':');
            let _column = parts.next()?;
            let line = parts.next()?.parse().ok()?;
            let file = parts.next()?;
            Some(CallSite::new(file, line))
        })
        .collect()
}

fn same_file(frame_file: &str, tracked: &str) -> bool {
    let frame_file = frame_file.replace('\\', "/");
    let tracked = tracked.replace('\\', "/");
    frame_file == tracked
        || frame_file
            .strip_suffix(tracked.as_str())
            .is_some_and(|prefix| prefix.ends_with('/'))
}

fn find_anchor(frames: &[CallSite], caller: &Location<'_>) -> Option<usize> {
    let exact = frames
        .iter()
        .position(|f| f.line == caller.line() && same_file(&f.file, caller.file()));
    exact.or_else(|| {
        frames.iter().position(|f| {
            same_file(&f.file, caller.file())
                && f.line >= caller.line()
                && f.line - caller.line() <= ANCHOR_LINE_SLACK
        })
    })
}

/// Apply the directory-header policy to a resolved file path
///
/// Keeps only the base name, or with `add_dir` one parent directory segment
/// plus the base name.
///
/// ```
/// use trace_logger::core::call_site::shorten_file;
///
/// assert_eq!(shorten_file("/home/app/demos/main.rs", false), "main.rs");
/// assert_eq!(shorten_file("/home/app/demos/main.rs", true), "demos/main.rs");
/// assert_eq!(shorten_file("main.rs", true), "main.rs");
/// ```
pub fn shorten_file(path: &str, add_dir: bool) -> &str {
    let is_sep = |c: char| c == '/' || c == '\\';
    let Some(slash) = path.rfind(is_sep) else {
        return path;
    };
    if add_dir {
        // A relative path with a single separator already is "dir/file".
        return match path[..slash].rfind(is_sep) {
            Some(dirsep) => &path[dirsep + 1..],
            None => path,
        };
    }
    &path[slash + 1..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_zero_uses_tracked_location() {
        let caller = Location::caller();
        let site = BacktraceResolver.resolve(0, caller).expect("depth 0 always resolves");
        assert_eq!(site.file, caller.file());
        assert_eq!(site.line, caller.line());
    }

    #[test]
    fn test_unknown_call_site() {
        let site = CallSite::unknown();
        assert_eq!(site.file, "???");
        assert_eq!(site.line, 1);
    }

    #[test]
    fn test_parse_frames() {
        let rendered = "   0: app::inner\n             at ./src/inner.rs:10:5\n   1: app::outer\n             at ./src/outer.rs:22:9\n   2: <unknown>\n";
        let frames = parse_frames(rendered);
        assert_eq!(
            frames,
            vec![CallSite::new("./src/inner.rs", 10), CallSite::new("./src/outer.rs", 22)]
        );
    }

    #[test]
    fn test_parse_frames_windows_path() {
        let rendered = "  3: app::main\n      at C:\\work\\app\\src\\main.rs:7:3\n";
        let frames = parse_frames(rendered);
        assert_eq!(frames, vec![CallSite::new("C:\\work\\app\\src\\main.rs", 7)]);
    }

    #[test]
    fn test_same_file_requires_segment_boundary() {
        assert!(same_file("./src/lib.rs", "src/lib.rs"));
        assert!(same_file("/abs/crate/src/lib.rs", "src/lib.rs"));
        assert!(!same_file("./src/mylib.rs", "lib.rs"));
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = |depth: usize, _caller: &'static Location<'static>| {
            Some(CallSite::new("fake.rs", depth as u32 + 100))
        };
        let site = resolver.resolve(2, Location::caller()).unwrap();
        assert_eq!(site, CallSite::new("fake.rs", 102));
    }

    #[test]
    fn test_shorten_file() {
        assert_eq!(shorten_file("/a/b/c.rs", false), "c.rs");
        assert_eq!(shorten_file("/a/b/c.rs", true), "b/c.rs");
        assert_eq!(shorten_file("b/c.rs", true), "b/c.rs");
        assert_eq!(shorten_file("src/core/c.rs", true), "core/c.rs");
        assert_eq!(shorten_file("c.rs", false), "c.rs");
        assert_eq!(shorten_file("???", true), "???");
    }
}
