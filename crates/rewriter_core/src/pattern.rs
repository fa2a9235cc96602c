use std::fmt;

use crate::placeholder::IMAGE_MARKER;

/// Grouping of image placeholders in a text: one entry per run of consecutive
/// placeholders, in order of appearance.
///
/// Blank lines inside a run do not break it; any other non-blank line does.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImagePattern {
    runs: Vec<usize>,
}

#[derive(Default)]
struct RunFold {
    runs: Vec<usize>,
    open: usize,
}

impl RunFold {
    fn step(mut self, line: &str) -> Self {
        let hits = line.matches(IMAGE_MARKER).count();
        if hits > 0 {
            self.open += hits;
        } else if !line.trim().is_empty() {
            self.close();
        }
        self
    }

    fn close(&mut self) {
        if self.open > 0 {
            self.runs.push(self.open);
            self.open = 0;
        }
    }

    fn finish(mut self) -> ImagePattern {
        self.close();
        ImagePattern { runs: self.runs }
    }
}

impl ImagePattern {
    /// Derives the run-lengths of placeholders in `content`.
    pub fn analyze(content: &str) -> Self {
        content
            .lines()
            .fold(RunFold::default(), RunFold::step)
            .finish()
    }

    pub fn from_runs(runs: Vec<usize>) -> Self {
        Self {
            runs: runs.into_iter().filter(|&n| n > 0).collect(),
        }
    }

    pub fn runs(&self) -> &[usize] {
        &self.runs
    }

    pub fn total(&self) -> usize {
        self.runs.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Prompt fragment describing the pattern the rewrite must keep.
    ///
    /// Empty when there are no placeholders.
    pub fn instruction(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        format!(
            "[이미지 배치 규칙]\n\
             - 원문에는 [이미지] 표시가 총 {total}개 있으며, 연속 배치 패턴은 {pattern} 입니다.\n\
             - [본문]에도 [이미지] 표시를 정확히 {total}개, 같은 묶음 순서({pattern})로 배치하세요.\n",
            total = self.total(),
            pattern = self,
        )
    }
}

impl fmt::Display for ImagePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, run) in self.runs.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{run}")?;
        }
        write!(f, "]")
    }
}
