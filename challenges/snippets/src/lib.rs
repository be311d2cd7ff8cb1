use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;

use log::debug;

pub mod dynamic_programming;
pub mod error;
pub mod object_model;

pub use error::{InputError, TaskError};

/// Signature every task implements.
pub type Solution = fn(&mut Scanner, &mut Writer) -> Result<(), InputError>;

/// Whitespace-separated token reader over any buffered source.
pub struct Scanner {
    reader: Box<dyn BufRead>,
    pending: VecDeque<String>,
}

impl Scanner {
    pub fn new(reader: impl BufRead + 'static) -> Self {
        Self {
            reader: Box::new(reader),
            pending: VecDeque::new(),
        }
    }

    /// Reads the next raw line, trimmed. Tokens still pending from a previous
    /// line are discarded. Returns `None` at end of input.
    pub fn next_line(&mut self) -> Result<Option<String>, InputError> {
        self.pending.clear();
        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }

    /// Reads the next token, crossing line boundaries as needed.
    pub fn token(&mut self) -> Result<String, InputError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            match self.next_line()? {
                Some(line) => self
                    .pending
                    .extend(line.split_whitespace().map(str::to_string)),
                None => return Err(InputError::Missing),
            }
        }
    }

    pub fn parse<T: FromStr>(&mut self) -> Result<T, InputError> {
        let token = self.token()?;
        token.parse().map_err(|_| InputError::Malformed {
            token,
            expected: std::any::type_name::<T>(),
        })
    }
}

/// Output writer that buffers in memory until the task completes.
pub struct Writer(Vec<u8>);

impl Writer {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn print<T: std::fmt::Display>(&mut self, value: T) {
        write!(self.0, "{}", value).expect("Failed write");
    }

    pub fn println<T: std::fmt::Display>(&mut self, value: T) {
        writeln!(self.0, "{}", value).expect("Failed write");
    }

    pub fn into_string(self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.0)
    }

    /// Copies the buffered output into `sink` and flushes it.
    pub fn flush_to(self, mut sink: impl Write) -> std::io::Result<()> {
        sink.write_all(&self.0)?;
        sink.flush()
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

/// A named category of tasks, each addressable by name.
pub struct TaskGroup {
    category: &'static str,
    tasks: Vec<(&'static str, Solution)>,
}

impl TaskGroup {
    pub fn new(category: &'static str) -> Self {
        Self {
            category,
            tasks: Vec::new(),
        }
    }

    pub fn add(mut self, name: &'static str, solve: Solution) -> Self {
        self.tasks.push((name, solve));
        self
    }

    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tasks.iter().map(|(name, _)| *name)
    }

    pub fn get(&self, problem: &str) -> Result<Solution, TaskError> {
        self.tasks
            .iter()
            .find(|(name, _)| *name == problem)
            .map(|(_, solve)| *solve)
            .ok_or_else(|| TaskError::UnknownTask {
                category: self.category.to_string(),
                problem: problem.to_string(),
            })
    }

    /// Runs `problem` against stdin, writing its output to stdout.
    pub fn run(&self, problem: &str) -> Result<(), TaskError> {
        let solve = self.get(problem)?;
        debug!("running {}/{}", self.category, problem);

        let mut scanner = Scanner::new(std::io::stdin().lock());
        let mut writer = Writer::new();
        solve(&mut scanner, &mut writer)?;
        writer.flush_to(std::io::stdout().lock())?;

        debug!("finished {}/{}", self.category, problem);
        Ok(())
    }

    /// Runs the recorded data cases for `problem`. Returns whether all passed.
    pub fn verify(&self, problem: &str) -> Result<bool, TaskError> {
        let solve = self.get(problem)?;
        Ok(testing::run_all_tests(self.category, problem, solve))
    }
}

/// Every registered task group.
pub fn groups() -> Vec<TaskGroup> {
    vec![object_model::tasks(), dynamic_programming::tasks()]
}

pub fn find_group(category: &str) -> Result<TaskGroup, TaskError> {
    groups()
        .into_iter()
        .find(|group| group.category() == category)
        .ok_or_else(|| TaskError::UnknownCategory(category.to_string()))
}

/// Data-driven cases stored as `data/<category>/<problem>/N.in` and `N.out`.
pub mod testing {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::path::PathBuf;
    use std::time::{Duration, Instant};

    /// Trimmed expected and actual output of one case, or why it could not run.
    pub type CaseResult = Result<(String, String, Duration), String>;

    fn case_dir(category: &str, problem_name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("data")
            .join(category)
            .join(problem_name)
    }

    pub fn discover_tests(category: &str, problem_name: &str) -> Vec<usize> {
        let mut test_numbers: Vec<usize> = fs::read_dir(case_dir(category, problem_name))
            .into_iter()
            .flat_map(|entries| entries.flatten())
            .filter_map(|entry| {
                let name = entry.file_name().into_string().ok()?;
                name.strip_suffix(".in")?.parse().ok()
            })
            .collect();

        test_numbers.sort_unstable();
        test_numbers
    }

    pub fn run_test_case<F>(
        category: &str,
        problem_name: &str,
        test_num: usize,
        solve_fn: F,
    ) -> CaseResult
    where
        F: FnOnce(&mut Scanner, &mut Writer) -> Result<(), InputError>,
    {
        let read = |ext: &str| {
            let path = case_dir(category, problem_name).join(format!("{}.{}", test_num, ext));
            fs::read_to_string(&path).map_err(|e| format!("Failed to read {}: {}", path.display(), e))
        };
        let input = read("in")?;
        let expected = read("out")?;

        let mut scanner = Scanner::new(Cursor::new(input));
        let mut writer = Writer::new();

        let start = Instant::now();
        solve_fn(&mut scanner, &mut writer).map_err(|e| format!("Solution failed: {}", e))?;
        let duration = start.elapsed();

        let actual = writer
            .into_string()
            .map_err(|e| format!("Output is not valid UTF-8: {}", e))?;

        Ok((expected.trim().to_string(), actual.trim().to_string(), duration))
    }

    /// Runs every discovered case in order.
    pub fn run_cases<F>(category: &str, problem_name: &str, solve_fn: F) -> Vec<(usize, CaseResult)>
    where
        F: Fn(&mut Scanner, &mut Writer) -> Result<(), InputError>,
    {
        discover_tests(category, problem_name)
            .into_iter()
            .map(|n| (n, run_test_case(category, problem_name, n, &solve_fn)))
            .collect()
    }

    /// Panics on the first case that errors or mismatches.
    pub fn verify_all_tests<F>(category: &str, problem_name: &str, solve_fn: F)
    where
        F: Fn(&mut Scanner, &mut Writer) -> Result<(), InputError>,
    {
        let results = run_cases(category, problem_name, solve_fn);
        assert!(
            !results.is_empty(),
            "No test cases found for {}/{}",
            category,
            problem_name
        );

        for (test_num, result) in results {
            match result {
                Ok((expected, actual, _)) => assert_eq!(
                    actual, expected,
                    "Test case {} failed\nExpected:\n{}\nActual:\n{}",
                    test_num, expected, actual
                ),
                Err(e) => panic!("Test case {} error: {}", test_num, e),
            }
        }
    }

    /// Prints a report for every case. Returns false if any case failed or none exist.
    pub fn run_all_tests<F>(category: &str, problem_name: &str, solve_fn: F) -> bool
    where
        F: Fn(&mut Scanner, &mut Writer) -> Result<(), InputError>,
    {
        let results = run_cases(category, problem_name, solve_fn);
        if results.is_empty() {
            println!("No test cases found for {}/{}", category, problem_name);
            return false;
        }

        let mut failed = 0;
        let mut total_duration = Duration::ZERO;

        for (test_num, result) in &results {
            match result {
                Ok((expected, actual, duration)) => {
                    total_duration += *duration;
                    let secs = duration.as_secs_f64();
                    if actual == expected {
                        println!("✓ Test case {}: PASSED ({:.2}s)", test_num, secs);
                    } else {
                        println!("✗ Test case {}: FAILED ({:.2}s)", test_num, secs);
                        println!("  Expected: {}", expected);
                        println!("  Actual:   {}", actual);
                        failed += 1;
                    }
                }
                Err(e) => {
                    println!("✗ Test case {}: ERROR - {}", test_num, e);
                    failed += 1;
                }
            }
        }

        println!("\nResults: {} passed, {} failed", results.len() - failed, failed);
        println!("Total time: {:.2}s", total_duration.as_secs_f64());
        failed == 0
    }
}
