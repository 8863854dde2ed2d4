/// CLI argument definitions for the `clo` command.
///
/// Defines the subcommands, their arguments, and long help text
/// using the `clap` derive macros.
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(name = "clo", version, about = "CLO exam scoring tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// All available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Compute per-student CLO scores from roster, responses, answer key and points
    #[command(long_about = "\
Compute per-student CLO (course learning outcome) scores.

Takes four CSV tables:
  roster      student list; must contain a student-id column (MSSV)
  responses   one row per student: id, declared exam-variant code (mã đề),
              one column per answered question (Câu 1, Câu 2, ...)
  answer-key  one row per question: question label, one column per variant
              holding the outcome code it probes, and answer columns tagged
              with the variant code (Đáp án_134)
  points      two columns: outcome code, point value

Column and question names are matched tolerantly: accents, casing,
whitespace and zero padding are normalized away (\"Câu 07\" == \"cau7\"),
and float-form variant codes collapse (\"134.0\" == \"134\").

Output: a summary report with per-student totals, a six-band score
distribution (<5, 5-<6, 6-<7, 7-<8, 8-<9, 9-10), the maximum achievable
total, and any diagnostics (unresolved questions, unknown variants,
outcome codes missing from the points table). Per-row anomalies never
abort the run; they score 0 and are reported.

Examples:
  clo score --roster df1.csv --responses df2.csv \\
            --answer-key df3.csv --points df4.csv
  clo score ... --json                 # machine-readable output
  clo score ... --output result.csv    # export the merged roster
  clo score ... --dist-output dist.csv # export the distribution")]
    Score {
        /// Roster CSV (student list with MSSV column)
        #[arg(long)]
        roster: PathBuf,

        /// Response CSV (one row per student with declared variant)
        #[arg(long)]
        responses: PathBuf,

        /// Answer-key CSV (one row per question)
        #[arg(long)]
        answer_key: PathBuf,

        /// Outcome-points CSV (outcome code, point value)
        #[arg(long)]
        points: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Write the merged roster with scores to this CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the score distribution to this CSV file
        #[arg(long)]
        dist_output: Option<PathBuf>,
    },
}
