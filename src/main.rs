//! Operator-facing menu for the triage desk.
//!
//! A thin text façade: every menu choice translates to exactly one core
//! operation. All data handling lives in the library; this binary only
//! prompts, prints, and reports failures without crashing the loop.

use anyhow::{Result, bail};
use chrono::Utc;
use itertools::Itertools;
use std::io::{self, BufRead, Write};
use std::path::Path;
use triage_desk::utils::{PerfTimer, create_intake_progress_bar};
use triage_desk::{
    Outcome, PatientRegistry, SampleWorkloads, SeverityDistribution, TreatedCase, TreatmentLog,
    TriageQueue, csv, workload,
};

/// Fixed seed for the performance demo so runs are comparable.
const DEMO_SEED: u64 = 12345;

struct App {
    registry: PatientRegistry,
    triage: TriageQueue,
    log: TreatmentLog,
}

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    App::new().run()
}

impl App {
    fn new() -> Self {
        Self {
            registry: PatientRegistry::new(),
            triage: TriageQueue::new(),
            log: TreatmentLog::new(),
        }
    }

    fn run(&self) -> Result<()> {
        loop {
            print_menu();
            match self.prompt("Choose: ")?.as_str() {
                "1" => self.register_patient()?,
                "2" => self.update_patient()?,
                "3" => self.enqueue_for_triage()?,
                "4" => self.peek_next(),
                "5" => self.admit_and_treat()?,
                "6" => self.print_triage_order(),
                "7" => self.find_patient()?,
                "8" => self.show_treatment_log()?,
                "9" => self.performance_demo()?,
                "10" => self.export_log_to_csv()?,
                "11" => self.import_from_csv()?,
                "0" => {
                    println!("Goodbye.");
                    return Ok(());
                }
                _ => println!("Invalid choice."),
            }
        }
    }

    fn register_patient(&self) -> Result<()> {
        println!("---- Register New Patient ----");

        let id = self.prompt("ID: ")?;
        let name = self.prompt("Name: ")?;
        let age = self.prompt_int("Age: ")?;
        let severity = self.prompt_int("Severity (1-10): ")?;

        let patient = self.registry.register(&id, &name, age, severity);
        println!("Registered: {patient}");
        Ok(())
    }

    fn update_patient(&self) -> Result<()> {
        println!("---- Update Patient ----");

        let id = self.prompt("ID: ")?;
        let name = self.prompt_allow_blank("New name (blank = no change): ")?;
        let age = self.prompt_int_allow_blank("New age (blank = no change): ")?;
        let severity = self.prompt_int_allow_blank("New severity (blank = no change): ")?;

        match self.registry.update(&id, name.as_deref(), age, severity) {
            Some(_) => println!("Patient updated."),
            None => println!("Patient not found."),
        }
        Ok(())
    }

    fn enqueue_for_triage(&self) -> Result<()> {
        let id = self.prompt("Enter patient ID to enqueue: ")?;

        if self.triage.enqueue_by_id(&self.registry, &id) {
            println!("Added to queue.");
        } else {
            println!("No such patient ID.");
        }
        Ok(())
    }

    fn peek_next(&self) {
        match self.triage.peek_next() {
            Some(patient) => println!("Next: {patient}"),
            None => println!("Triage queue empty."),
        }
    }

    fn admit_and_treat(&self) -> Result<()> {
        let Some(patient) = self.triage.dequeue_next() else {
            println!("Queue empty.");
            return Ok(());
        };

        println!("Treating: {patient}");
        let start = Utc::now();

        let outcome = self.ask_outcome()?;
        let notes = self.prompt("Notes: ")?;
        let end = Utc::now();

        self.log
            .append(TreatedCase::new(patient, start, end, outcome, notes));
        println!("Treatment logged.");
        Ok(())
    }

    fn print_triage_order(&self) {
        println!("---- Triage Order ----");

        let order = self.triage.snapshot_order();
        if order.is_empty() {
            println!("(queue empty)");
        } else {
            println!("{}", order.iter().map(ToString::to_string).join("\n"));
        }
    }

    fn find_patient(&self) -> Result<()> {
        let id = self.prompt("ID: ")?;

        match self.registry.lookup(&id) {
            Some(patient) => println!("{patient}"),
            None => println!("Not found."),
        }
        Ok(())
    }

    fn show_treatment_log(&self) -> Result<()> {
        println!("1) Oldest -> Newest");
        println!("2) Newest -> Oldest");
        let choice = self.prompt("Choose: ")?;

        let cases = if choice == "2" {
            self.log.newest_first()
        } else {
            self.log.oldest_first()
        };

        println!("---- Treatment Log ----");
        for case in &cases {
            println!("{case}");
        }
        Ok(())
    }

    fn performance_demo(&self) -> Result<()> {
        println!("---- Performance Demo ----");

        let enqueues = self.prompt_int("How many patients to enqueue? ")?;
        let dequeues = self.prompt_int("How many dequeues? ")?;
        let enqueues = usize::try_from(enqueues.max(0)).unwrap_or(0);
        let dequeues = usize::try_from(dequeues.max(0)).unwrap_or(0);

        let mut workloads = SampleWorkloads::new(DEMO_SEED, SeverityDistribution::Uniform);

        {
            let _t = PerfTimer::start("Enqueue workload");
            let pb = create_intake_progress_bar(enqueues as u64, Some("Enqueueing"));
            for _ in 0..enqueues {
                workloads.enqueue_random_patients(1, &self.registry, &self.triage);
                pb.inc(1);
            }
            pb.finish_and_clear();
        }

        {
            let _t = PerfTimer::start("Dequeue workload");
            workload::perform_dequeues(dequeues, &self.triage);
        }

        println!(
            "Registry now holds {} patients; {} still waiting.",
            self.registry.len(),
            self.triage.len()
        );
        Ok(())
    }

    fn export_log_to_csv(&self) -> Result<()> {
        let path = self.prompt("CSV file name: ")?;

        match csv::export_log(Path::new(&path), &self.log.oldest_first()) {
            Ok(()) => println!("Exported to {path}"),
            Err(e) => println!("Export failed: {e}"),
        }
        Ok(())
    }

    fn import_from_csv(&self) -> Result<()> {
        let path = self.prompt("CSV file name: ")?;

        match csv::load_patients(Path::new(&path), &self.registry) {
            Ok(count) => println!("Loaded {count} patients from {path}"),
            Err(e) => println!("Import failed: {e}"),
        }
        Ok(())
    }

    fn ask_outcome(&self) -> Result<Outcome> {
        loop {
            println!("Outcome: 1) STABLE  2) OBSERVE  3) TRANSFER");
            let choice = self.prompt("Choose: ")?;
            match choice.as_str() {
                "1" => return Ok(Outcome::Stable),
                "2" => return Ok(Outcome::Observe),
                "3" => return Ok(Outcome::Transfer),
                other => {
                    // Also accept the outcome spelled out.
                    if let Ok(outcome) = other.parse::<Outcome>() {
                        return Ok(outcome);
                    }
                    println!("Invalid choice.");
                }
            }
        }
    }

    /// Print a message and return one trimmed line of input.
    fn prompt(&self, msg: &str) -> Result<String> {
        print!("{msg}");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            bail!("input stream closed");
        }
        Ok(line.trim().to_string())
    }

    /// Like `prompt`, but blank input becomes `None` ("do not change").
    fn prompt_allow_blank(&self, msg: &str) -> Result<Option<String>> {
        let s = self.prompt(msg)?;
        Ok(if s.is_empty() { None } else { Some(s) })
    }

    /// Read a required integer, re-prompting until input parses.
    fn prompt_int(&self, msg: &str) -> Result<i32> {
        loop {
            match self.prompt(msg)?.parse() {
                Ok(value) => return Ok(value),
                Err(_) => println!("Enter a valid integer."),
            }
        }
    }

    /// Read an optional integer; blank or unparsable input means `None`.
    fn prompt_int_allow_blank(&self, msg: &str) -> Result<Option<i32>> {
        Ok(self.prompt(msg)?.parse().ok())
    }
}

fn print_menu() {
    println!();
    println!("========= Triage Desk =========");
    println!("1) Register patient");
    println!("2) Update patient");
    println!("3) Enqueue patient");
    println!("4) Peek next");
    println!("5) Admit & treat next");
    println!("6) Print triage order");
    println!("7) Find patient");
    println!("8) Show treatment log");
    println!("9) Performance demo");
    println!("10) Export log to CSV");
    println!("11) Import patients from CSV");
    println!("0) Exit");
    println!("===============================");
}
