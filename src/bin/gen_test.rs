//! Synthetic WhatsApp transcript generator for stress testing chatstat.
//!
//! Usage: cargo run --features gen-test --bin gen_test -- [messages] [output] [layout]
//! Example: cargo run --features gen-test --bin gen_test -- 100000 heavy_chat.txt mixed
//!
//! Layouts: `bracketed` (iOS), `dashed` (Android), `mixed` (both, line by line).

use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Instant;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::Rng;
use rand::seq::SliceRandom;

const EMOJIS: &[&str] = &[
    "😀", "😂", "🤣", "😍", "🥰", "🤔", "🙄", "😱", "🔥", "👍", "👍🏽", "❤️", "💔", "🇮🇳", "🇰🇿",
    "👨‍👩‍👧‍👦", "🤷‍♀️",
];

const SENDERS: &[&str] = &[
    "Alice",
    "Bob",
    "Priya Sharma",
    "Иван",
    "村上",
    "محمد",
    "\u{FF21}nn Fullwidth",
    "+91 98765 43210",
    "🔥FireUser🔥",
    "Name: With Colon",
];

const MEDIA: &[&str] = &[
    "image omitted",
    "video omitted",
    "audio omitted",
    "sticker omitted",
    "document omitted",
    "<Media omitted>",
];

const NOTIFICATIONS: &[&str] = &[
    "Messages and calls are end-to-end encrypted. No one outside of this chat, not even WhatsApp, can read or listen to them.",
    "Alice created group \"Weekend Trip\"",
    "Alice added Bob",
    "Bob left",
    "Priya Sharma changed the subject to \"Trip 2.0\"",
    "Alice changed this group's icon",
];

#[derive(Clone, Copy)]
enum Layout {
    Bracketed,
    Dashed,
    Mixed,
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map(|s| s.as_str()).unwrap_or("heavy_chat.txt");
    let layout = match args.get(3).map(|s| s.as_str()).unwrap_or("mixed") {
        "bracketed" | "ios" => Layout::Bracketed,
        "dashed" | "android" => Layout::Dashed,
        "mixed" => Layout::Mixed,
        other => {
            eprintln!("Unknown layout: {}. Use 'bracketed', 'dashed' or 'mixed'", other);
            std::process::exit(1);
        }
    };

    println!("🧪 Transcript Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {}", count);
    println!("   Output:   {}", output);
    println!();

    generate(count, output, layout);
}

fn generate(count: usize, output: &str, layout: Layout) {
    let file = File::create(output).expect("Failed to create output file");
    let mut writer = BufWriter::with_capacity(1024 * 1024, file);

    let mut rng = rand::thread_rng();
    let start = Instant::now();
    let mut bytes_written: usize = 0;
    let mut ts = NaiveDate::from_ymd_opt(2023, 1, 1)
        .and_then(|d| d.and_hms_opt(8, 0, 0))
        .expect("valid start date");

    // Exports sometimes start with a line that belongs to no message.
    let preamble = "Chat history exported from WhatsApp\n";
    writer.write_all(preamble.as_bytes()).unwrap();
    bytes_written += preamble.len();

    for i in 0..count {
        ts += Duration::seconds(rng.gen_range(5..3_600));

        let bracketed = match layout {
            Layout::Bracketed => true,
            Layout::Dashed => false,
            Layout::Mixed => i % 2 == 0,
        };
        let header = format_header(ts, bracketed, i);

        let line = if i % 50 == 0 {
            let notice = NOTIFICATIONS.choose(&mut rng).unwrap();
            format!("{header}{notice}\n")
        } else {
            let sender = SENDERS.choose(&mut rng).unwrap();
            let body = generate_body(&mut rng, i);
            format!("{header}{sender}: {body}\n")
        };
        bytes_written += line.len();
        writer.write_all(line.as_bytes()).unwrap();

        // Occasionally insert lines that should be dropped or merged
        if i % 1000 == 500 {
            let garbage = generate_odd_line(&mut rng);
            writer.write_all(garbage.as_bytes()).unwrap();
            bytes_written += garbage.len();
        }

        if (i + 1) % 10000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            let mps = (i + 1) as f64 / elapsed;
            let mb = bytes_written as f64 / 1_000_000.0;
            eprint!("\r   Generated {}/{} ({:.1} MB, {:.0} msg/s)", i + 1, count, mb, mps);
        }
    }

    writer.flush().unwrap();

    let elapsed = start.elapsed();
    let mb = bytes_written as f64 / 1_000_000.0;

    println!("\n\n✅ Done!");
    println!("   Size: {:.2} MB", mb);
    println!("   Time: {:.2}s", elapsed.as_secs_f64());
    println!("   Speed: {:.0} msg/s", count as f64 / elapsed.as_secs_f64());
}

/// Renders a header in one of the layouts, cycling through the time styles
/// each layout is known to use.
fn format_header(ts: NaiveDateTime, bracketed: bool, index: usize) -> String {
    if bracketed {
        match index % 3 {
            0 => format!("[{}] ", ts.format("%d/%m/%y, %H:%M:%S")),
            1 => format!("[{}] ", ts.format("%d/%m/%Y, %H:%M:%S")),
            // iOS puts a narrow no-break space before the meridiem
            _ => format!("\u{200E}[{}] ", ts.format("%d/%m/%Y, %I:%M:%S\u{202F}%p")),
        }
    } else {
        match index % 3 {
            0 => format!("{} - ", ts.format("%d/%m/%Y, %H:%M")),
            1 => format!("{} - ", ts.format("%d/%m/%Y, %I:%M %p")),
            _ => format!("{} - ", ts.format("%-d/%-m/%y, %H:%M")),
        }
    }
}

fn generate_body(rng: &mut impl Rng, index: usize) -> String {
    match index % 16 {
        0..=5 => format!("Normal message #{} with some text", index),
        6 => MEDIA.choose(rng).unwrap().to_string(),
        7 => format!("\u{200E}{}", MEDIA.choose(rng).unwrap()),
        8 => format!("check https://example.com/item/{} and www.rust-lang.org.", index),
        9 => {
            let emojis: String = (0..rng.gen_range(1..20))
                .map(|_| *EMOJIS.choose(rng).unwrap())
                .collect();
            format!("haha {} #{}", emojis, index)
        }
        // Continuation lines
        10 => format!("first line #{}\nsecond line\n  indented third line", index),
        11 => format!("Kya scene hai yaar, kal milte hai #{}", index),
        12 => format!("Ｆｕｌｌｗｉｄｔｈ ｔｅｘｔ #{}", index),
        13 => format!("\u{202B}مرحبا\u{202C} mixed direction #{}", index),
        14 => "time: 10:30 works?".to_string(),
        _ => format!("Fallback message #{}", index),
    }
}

fn generate_odd_line(rng: &mut impl Rng) -> String {
    match rng.gen_range(0..5) {
        0 => "This line has no timestamp and continues the previous message\n".to_string(),
        1 => "[31/02/2024, 10:00:00] Ghost: impossible date, dropped\n".to_string(),
        2 => "-------------------------------------------\n".to_string(),
        3 => "\n".to_string(),
        _ => "\u{200F}   \n".to_string(),
    }
}
