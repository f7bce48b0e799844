use drills::config::Config;
use drills::list::List;
use drills::records::{Date, Registry, Student};
use drills::{matrix, primes, recursion, search, sort, strings};
use log::{debug, info, warn};
use rand::Rng;
use std::io::{self, BufRead, Write};
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(name = "drills", about = "Console drills for classic procedural exercises.")]
struct Options {
    /// Log at debug level instead of info.
    #[structopt(short, long)]
    verbose: bool,

    #[structopt(subcommand)]
    exercise: Option<Exercise>,
}

#[derive(StructOpt)]
enum Exercise {
    /// Read a count from stdin, then print the list, its reversal and its
    /// sorted form, one payload per line.
    Chain,
    /// Print the moves solving the Towers of Hanoi for the given disk count.
    Hanoi { disks: u32 },
    /// Sort a randomly generated array with the classroom sorts.
    Sort {
        /// Length of the generated array.
        #[structopt(short, long)]
        len: Option<usize>,
    },
    /// Recursive binary search for a key over the demo domain.
    Search { key: i64 },
    /// Report the primality of each number read from stdin until a zero.
    Primes,
    /// Check whether the text is a palindrome, ignoring case and punctuation.
    Palindrome { text: String },
    /// Print the spiral traversal of the 6x6 demo grid.
    Spiral,
    /// Run the interactive student registry menu.
    Records,
    /// Print the factorial and classroom Fibonacci of n.
    Facts { n: u64 },
}

fn main() {
    let options = Options::from_args();
    let level = if options.verbose {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    simple_logger::init_with_level(level).unwrap();

    let config = Config::default();
    let result = match options.exercise.unwrap_or(Exercise::Chain) {
        Exercise::Chain => run_chain(),
        Exercise::Hanoi { disks } => run_hanoi(disks),
        Exercise::Sort { len } => run_sort(&config, len),
        Exercise::Search { key } => run_search(&config, key),
        Exercise::Primes => run_primes(),
        Exercise::Palindrome { text } => run_palindrome(&text),
        Exercise::Spiral => run_spiral(),
        Exercise::Records => run_records(&config),
        Exercise::Facts { n } => run_facts(n),
    };

    if let Err(message) = result {
        log::error!("{}", message);
        std::process::exit(1);
    }
}

/// The linked-list drill: one count in, three views out.
fn run_chain() -> Result<(), String> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|err| format!("failed to read the count: {}", err))?;
    let trimmed = line.trim();
    let count: i64 = trimmed
        .parse()
        .map_err(|_| format!("the count must be a non-negative integer, got {:?}", trimmed))?;
    if count < 0 {
        return Err(format!("the count must be non-negative, got {}", count));
    }

    let mut list = List::sequence(count as u64);
    debug!("original view");
    print_view(&list)?;
    list.reverse();
    debug!("reversed view");
    print_view(&list)?;
    list.sort();
    debug!("sorted view");
    print_view(&list)?;
    Ok(())
}

fn print_view(list: &List) -> Result<(), String> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for value in list.iter() {
        writeln!(out, "{}", value).map_err(|err| format!("failed to write a view: {}", err))?;
    }
    Ok(())
}

fn run_hanoi(disks: u32) -> Result<(), String> {
    if disks > 30 {
        return Err(format!(
            "{} disks means 2^{} - 1 moves; pick something below 31",
            disks, disks
        ));
    }
    let moves = recursion::hanoi(disks, 'A', 'C', 'B');
    debug!("{} disks take {} moves", disks, moves.len());
    for (from, to) in moves {
        println!("{}->{}", from, to);
    }
    Ok(())
}

fn run_sort(config: &Config, len: Option<usize>) -> Result<(), String> {
    let len = len.unwrap_or(config.demo_len);
    let mut rng = rand::thread_rng();
    let values: Vec<i64> = (0..len)
        .map(|_| rng.gen_range(0, config.demo_range))
        .collect();
    println!("{}", join(&values));

    let mut by_bubble = values.clone();
    sort::bubble_sort(&mut by_bubble);
    let mut by_selection = values;
    sort::selection_sort(&mut by_selection);
    debug!("bubble and selection agree: {}", by_bubble == by_selection);
    println!("{}", join(&by_bubble));
    Ok(())
}

fn run_search(config: &Config, key: i64) -> Result<(), String> {
    let domain: Vec<i64> = (1..=config.search_bound).collect();
    match search::binary_search(&domain, &key) {
        Some(index) => println!("found {} at index {}", key, index),
        None => println!("{} is not in 1..={}", key, config.search_bound),
    }
    Ok(())
}

/// Reads numbers until a zero, reporting the primality of each. Lines that
/// do not parse are skipped with a warning, not fatal.
fn run_primes() -> Result<(), String> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.map_err(|err| format!("failed to read input: {}", err))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let n: u64 = match trimmed.parse() {
            Ok(n) => n,
            Err(_) => {
                warn!("not a non-negative integer: {:?}", trimmed);
                continue;
            }
        };
        if n == 0 {
            break;
        }
        if primes::is_prime(n) {
            println!("{} is prime", n);
        } else {
            println!("{} is not prime", n);
        }
    }
    Ok(())
}

fn run_palindrome(text: &str) -> Result<(), String> {
    if strings::is_palindrome(text) {
        println!("palindrome");
    } else {
        println!("not a palindrome");
    }
    Ok(())
}

fn run_spiral() -> Result<(), String> {
    let cells = matrix::spiral(&matrix::demo_grid());
    println!("{}", join(&cells));
    Ok(())
}

fn run_facts(n: u64) -> Result<(), String> {
    println!("{}! = {}", n, recursion::factorial(n));
    if n > 30 {
        warn!(
            "the classroom fibonacci is doubly recursive; {} will take a while",
            n
        );
    }
    println!("fib({}) = {}", n, recursion::fibonacci(n));
    Ok(())
}

/// The registry menu: enter students, look them up by id, quit. End of
/// input quits as well.
fn run_records(config: &Config) -> Result<(), String> {
    let mut registry = Registry::with_capacity(config.student_slots);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("1. enter a student");
        println!("2. look up a student by id");
        println!("3. quit");
        let choice = match next_line(&mut lines)? {
            Some(choice) => choice,
            None => break,
        };
        match choice.as_str() {
            "1" => {
                if let Err(message) = enter_student(&mut registry, &mut lines) {
                    println!("{}", message);
                }
            }
            "2" => match prompt_number::<u32>(&mut lines, "id: ")? {
                Some(id) => describe_student(&registry, id),
                None => break,
            },
            "3" => break,
            other => println!("unknown choice: {:?}", other),
        }
    }
    info!("{} students on record", registry.len());
    Ok(())
}

fn enter_student(
    registry: &mut Registry,
    lines: &mut io::Lines<io::StdinLock<'_>>,
) -> Result<(), String> {
    let name = match prompt_line(lines, "name: ")? {
        Some(name) => name,
        None => return Err("end of input".to_owned()),
    };
    let id = match prompt_number::<u32>(lines, "id: ")? {
        Some(id) => id,
        None => return Err("end of input".to_owned()),
    };
    let year = match prompt_number::<i32>(lines, "birth year: ")? {
        Some(year) => year,
        None => return Err("end of input".to_owned()),
    };
    let month = match prompt_number::<u32>(lines, "birth month: ")? {
        Some(month) => month,
        None => return Err("end of input".to_owned()),
    };
    let day = match prompt_number::<u32>(lines, "birth day: ")? {
        Some(day) => day,
        None => return Err("end of input".to_owned()),
    };

    let student = Student {
        id,
        name,
        birthday: Date::new(year, month, day),
    };
    registry.add(student).map_err(|err| err.message())
}

fn describe_student(registry: &Registry, id: u32) {
    match registry.find(id) {
        Some(student) => {
            println!("name: {}", student.name);
            println!("id: {}", student.id);
            println!("born: {}", student.birthday);
            println!("hundredth-day feast: {}", student.birthday.hundredth_day());
        }
        None => println!("no student with id {}", id),
    }
}

fn prompt_line(
    lines: &mut io::Lines<io::StdinLock<'_>>,
    prompt: &str,
) -> Result<Option<String>, String> {
    print!("{}", prompt);
    io::stdout()
        .flush()
        .map_err(|err| format!("failed to flush the prompt: {}", err))?;
    next_line(lines)
}

/// Keeps prompting until a line parses as a number; `None` on end of input.
fn prompt_number<T: std::str::FromStr>(
    lines: &mut io::Lines<io::StdinLock<'_>>,
    prompt: &str,
) -> Result<Option<T>, String> {
    loop {
        match prompt_line(lines, prompt)? {
            Some(line) => match line.parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => println!("not a number: {:?}", line),
            },
            None => return Ok(None),
        }
    }
}

fn next_line(lines: &mut io::Lines<io::StdinLock<'_>>) -> Result<Option<String>, String> {
    match lines.next() {
        Some(Ok(line)) => Ok(Some(line.trim().to_owned())),
        Some(Err(err)) => Err(format!("failed to read input: {}", err)),
        None => Ok(None),
    }
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<String>>()
        .join(" ")
}
