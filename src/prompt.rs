//! Console questions asked outside of a game

use anyhow::{anyhow, Result};

use std::io::{BufRead, Write};

fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut buffer = String::new();
    if input.read_line(&mut buffer)? == 0 {
        return Err(anyhow!("input closed"));
    }
    Ok(buffer)
}

/// Repeats `question` until the answer starts with one of `choices`
/// (ignoring case), returning that letter
pub fn ask_choice<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    choices: &[char],
    complaint: &str,
) -> Result<char> {
    loop {
        write!(output, "{}", question)?;
        output.flush()?;

        let answer = read_line(input)?;
        match answer.trim().to_lowercase().chars().next() {
            Some(letter) if choices.contains(&letter) => return Ok(letter),
            _ => writeln!(output, "{}", complaint)?,
        }
    }
}

/// Asks whether the player is new (`true`) or returning (`false`)
pub fn ask_new_player<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<bool> {
    let answer = ask_choice(
        input,
        output,
        "Enter 'new' or 'returning': ",
        &['n', 'r'],
        "That doesn't look like 'new' or 'returning'!",
    )?;
    Ok(answer == 'n')
}

pub fn ask_play_again<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<bool> {
    let answer = ask_choice(
        input,
        output,
        "Enter 'yes' or 'no': ",
        &['y', 'n'],
        "That doesn't look like yes or no!",
    )?;
    Ok(answer == 'y')
}

/// Reads a non-empty player name, also used as the stats file name
pub fn ask_name<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    loop {
        write!(output, "Enter your name: ")?;
        output.flush()?;

        let name = read_line(input)?.trim().to_string();
        let valid = !name.is_empty()
            && !name
                .chars()
                .any(|c| std::path::is_separator(c) || c.is_control());
        if valid {
            return Ok(name);
        }
        writeln!(output, "Names can't be empty or contain path separators!")?;
    }
}
