//! Line-based text console.
//!
//! Generic over the reader and writer so it can run on stdin/stdout or on
//! in-memory buffers. Invalid input is re-prompted here and never reaches
//! the engine. Write failures during `notify` are held and returned from
//! the next request.

use std::io::{self, BufRead, Write};

use super::{GameEvent, UiPort};
use crate::core::config::validate_player_name;
use crate::error::{GameError, Result};
use crate::rules::{FinalReport, StatusSnapshot};

/// Text console UI.
#[derive(Debug)]
pub struct ConsolePort<R, W> {
    input: R,
    output: W,
    write_error: Option<io::Error>,
}

impl<R: BufRead, W: Write> ConsolePort<R, W> {
    /// Create a console over `input` and `output`.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            write_error: None,
        }
    }

    /// Give back the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn check_output(&mut self) -> Result<()> {
        match self.write_error.take() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        // Non-UTF-8 bytes decode lossily and fail the caller's validation.
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    fn prompt_number(
        &mut self,
        text: &str,
        min: usize,
        max: usize,
        range_msg: &str,
    ) -> Result<usize> {
        loop {
            let line = self.prompt(text)?;
            match line.parse::<usize>() {
                Ok(n) if (min..=max).contains(&n) => return Ok(n),
                Ok(_) => self.say(range_msg)?,
                Err(_) => self.say("Please enter a valid number.")?,
            }
        }
    }

    fn render(&mut self, event: &GameEvent) -> io::Result<()> {
        let out = &mut self.output;
        match event {
            GameEvent::Welcome => {
                writeln!(out, "=== SAVE OUR PLANET: SUSTAINABILITY BOARD GAME ===")
            }
            GameEvent::EfficiencyExplained => writeln!(
                out,
                "\nEfficiency drives your grants. It is calculated as:\n\
                 (Total property value * 100) / (Total spent + total property value)\n"
            ),
            GameEvent::Status(snapshot) => render_status(out, snapshot),
            GameEvent::TurnStarted { player, resources } => {
                writeln!(out, "\n=== {player}'s TURN ===")?;
                writeln!(out, "Resources: {resources}")
            }
            GameEvent::TurnOptions { choices } => {
                writeln!(out, "\nOptions:")?;
                for (i, choice) in choices.iter().enumerate() {
                    writeln!(out, "{}. {choice}", i + 1)?;
                }
                Ok(())
            }
            GameEvent::TurnSkipped { player } => {
                writeln!(out, "\n{player} is in the wasteland and misses this turn.")
            }
            GameEvent::DiceRolled { player, roll } => writeln!(out, "{player} rolled {roll}"),
            GameEvent::Moved { player, square, .. } => writeln!(out, "{player} moved to {square}"),
            GameEvent::GrantReceived {
                player,
                efficiency,
                amount,
            } => {
                writeln!(out, "{player} passed the Sustainability Grant!")?;
                writeln!(out, "Efficiency score: {efficiency}")?;
                writeln!(out, "Grant received: {amount} resources")
            }
            GameEvent::PurchaseOffered { property, cost, .. } => {
                writeln!(out, "{property} is unowned.")?;
                writeln!(out, "Cost to purchase: {cost} resources")?;
                writeln!(out, "Would you like to purchase it?\n1. Yes\n2. No")
            }
            GameEvent::PurchaseUnaffordable { property, cost, .. } => {
                writeln!(out, "{property} is unowned.")?;
                writeln!(out, "Cost to purchase: {cost} resources")?;
                writeln!(out, "You don't have enough resources to purchase this property.")
            }
            GameEvent::Purchased {
                player,
                property,
                cost,
            } => writeln!(out, "{player} purchased {property} for {cost} resources"),
            GameEvent::PurchaseDeclined { player, property } => {
                writeln!(out, "{player} decided not to purchase {property}")
            }
            GameEvent::OwnProperty { .. } => writeln!(out, "You own this property."),
            GameEvent::RentDue {
                owner,
                property,
                amount,
                ..
            } => {
                writeln!(out, "{property} is owned by {owner}")?;
                writeln!(out, "Rent to pay: {amount} resources")
            }
            GameEvent::RentPaid {
                payer,
                owner,
                amount,
            } => writeln!(out, "{payer} paid {amount} resources to {owner}"),
            GameEvent::RentPartial {
                payer,
                owner,
                amount,
            } => {
                writeln!(out, "{payer} doesn't have enough resources to pay rent!")?;
                writeln!(out, "All remaining resources ({amount}) go to {owner}")?;
                writeln!(out, "{payer} has run out of resources!")
            }
            GameEvent::WastelandLanded { player } => {
                writeln!(out, "{player} landed on the Wasteland")
            }
            GameEvent::WastelandOffer { .. } => {
                writeln!(out, "You have significantly more resources than the others.")?;
                writeln!(out, "Options:")?;
                writeln!(out, "1. Stay in the wasteland for your next turn")?;
                writeln!(out, "2. Distribute 25% of your resources to the other players")
            }
            GameEvent::WastelandStay { player } => {
                writeln!(out, "{player} will spend the next turn in the wasteland.")
            }
            GameEvent::ResourcesDistributed {
                player,
                amount,
                per_recipient,
            } => {
                writeln!(out, "{player} is distributing {amount} resources")?;
                writeln!(out, "Each other player receives {per_recipient} resources")
            }
            GameEvent::WastelandQuiet { .. } => writeln!(out, "Nothing happens this turn."),
            GameEvent::DevelopmentOptions { options, .. } => {
                writeln!(out, "\nSelect a property to develop:")?;
                for (i, option) in options.iter().enumerate() {
                    writeln!(
                        out,
                        "{}. {} (Current Level: {}, Development Cost: {})",
                        i + 1,
                        option.name,
                        option.level,
                        option.cost
                    )?;
                }
                Ok(())
            }
            GameEvent::DevelopmentConfirmation { .. } => {
                writeln!(
                    out,
                    "This development requires spending the next turn in the wasteland."
                )?;
                writeln!(out, "Do you want to proceed?\n1. Yes\n2. No")
            }
            GameEvent::Developed {
                player,
                property,
                development,
                level,
                cost,
            } => writeln!(
                out,
                "{player} developed {property} into {development} \
                 (level {level}) for {cost} resources"
            ),
            GameEvent::DevelopmentCancelled { .. } => writeln!(out, "Development cancelled."),
            GameEvent::DevelopmentUnaffordable { .. } => {
                writeln!(out, "Not enough resources to develop this property.")
            }
            GameEvent::Quit { player } => writeln!(out, "{player} has decided to quit the game."),
            GameEvent::GameOver => {
                writeln!(out, "\nOnly one player remains with resources. Game over!")
            }
            GameEvent::FinalResults(report) => render_report(out, report),
        }
    }
}

fn render_status(out: &mut impl Write, snapshot: &StatusSnapshot) -> io::Result<()> {
    writeln!(out, "\n=== CURRENT GAME STATUS ===")?;
    writeln!(out, "\nCurrent Board State:")?;
    for square in &snapshot.squares {
        write!(out, "[{}] {}", square.position, square.name)?;
        if square.purchasable {
            match (&square.owner, square.level) {
                (Some(owner), Some(level)) => {
                    write!(out, " - Owned by {owner} (Level {level})")?;
                    if square.max_level {
                        write!(out, " - Max Level")?;
                    }
                }
                _ => write!(out, " - Unowned")?,
            }
        }
        writeln!(out)?;
    }

    writeln!(out, "\nPlayer Resources:")?;
    for (name, resources) in &snapshot.balances {
        writeln!(out, "{name}: {resources} resources")?;
    }
    writeln!(out)
}

fn render_report(out: &mut impl Write, report: &FinalReport) -> io::Result<()> {
    writeln!(out, "\n=== FINAL RESULTS ===")?;
    for standing in &report.standings {
        writeln!(out, "\n{}:", standing.name)?;
        writeln!(out, "Resources: {}", standing.resources)?;
        writeln!(out, "Efficiency Score: {}", standing.efficiency)?;
        writeln!(out, "Properties owned:")?;
        if standing.holdings.is_empty() {
            writeln!(out, "None")?;
        }
        for holding in &standing.holdings {
            writeln!(
                out,
                "- {} (Level {}, Value: {})",
                holding.name, holding.level, holding.value
            )?;
        }
        writeln!(out, "Total Worth: {}", standing.total_worth)?;
    }
    writeln!(out, "\nThank you for playing Save Our Planet!")
}

impl<R: BufRead, W: Write> UiPort for ConsolePort<R, W> {
    fn request_player_count(&mut self, min: usize, max: usize) -> Result<usize> {
        self.check_output()?;
        let range_msg = format!("Number of players must be between {min} and {max}.");
        self.prompt_number(
            &format!("Enter number of players ({min}-{max}): "),
            min,
            max,
            &range_msg,
        )
    }

    fn request_player_names(&mut self, count: usize) -> Result<Vec<String>> {
        self.check_output()?;
        self.say("\nEnter player names:")?;

        let mut names: Vec<String> = Vec::with_capacity(count);
        for i in 0..count {
            loop {
                let name = self.prompt(&format!("Player {} name: ", i + 1))?;
                match validate_player_name(&name, &names) {
                    Ok(()) => {
                        names.push(name);
                        break;
                    }
                    Err(GameError::InvalidInput(msg)) => {
                        self.say(&format!("Invalid name: {msg}."))?;
                    }
                    Err(err) => return Err(err),
                }
            }
        }
        Ok(names)
    }

    fn request_choice(&mut self, max_option: usize) -> Result<usize> {
        self.check_output()?;
        let range_msg = format!("Please enter a number between 1 and {max_option}.");
        self.prompt_number(
            &format!("Enter your choice (1-{max_option}): "),
            1,
            max_option,
            &range_msg,
        )
    }

    fn notify(&mut self, event: &GameEvent) {
        if let Err(err) = self.render(event) {
            self.write_error.get_or_insert(err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> ConsolePort<Cursor<Vec<u8>>, Vec<u8>> {
        ConsolePort::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(port: ConsolePort<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(port.into_output()).unwrap()
    }

    #[test]
    fn test_player_count_reprompts() {
        let mut port = console("abc\n7\n3\n");
        assert_eq!(port.request_player_count(2, 4).unwrap(), 3);

        let text = output(port);
        assert!(text.contains("Please enter a valid number."));
        assert!(text.contains("Number of players must be between 2 and 4."));
    }

    #[test]
    fn test_player_names_validation() {
        let long = "x".repeat(26);
        let mut port = console(&format!("Ada\n\nAda\n{long}\nGrace\n"));
        assert_eq!(port.request_player_names(2).unwrap(), vec!["Ada", "Grace"]);

        let text = output(port);
        assert!(text.contains("name cannot be empty"));
        assert!(text.contains("already taken"));
        assert!(text.contains("at most 25 characters"));
    }

    #[test]
    fn test_choice_range() {
        let mut port = console("0\n4\n2\n");
        assert_eq!(port.request_choice(3).unwrap(), 2);
    }

    #[test]
    fn test_invalid_utf8_reprompts() {
        let input = vec![0xff, 0xfe, b'\n', b'2', b'\n'];
        let mut port = ConsolePort::new(Cursor::new(input), Vec::new());
        assert_eq!(port.request_choice(2).unwrap(), 2);

        let text = String::from_utf8(port.into_output()).unwrap();
        assert!(text.contains("Please enter a valid number."));
    }

    #[test]
    fn test_eof_is_input_closed() {
        let mut port = console("x\n");
        assert!(matches!(port.request_choice(2), Err(GameError::InputClosed)));
    }

    #[test]
    fn test_render_events() {
        let mut port = console("");
        port.notify(&GameEvent::Welcome);
        port.notify(&GameEvent::GrantReceived {
            player: "Ada".into(),
            efficiency: 83,
            amount: 515,
        });

        let text = output(port);
        assert!(text.contains("SAVE OUR PLANET"));
        assert!(text.contains("Efficiency score: 83"));
        assert!(text.contains("Grant received: 515 resources"));
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_surfaces_on_next_request() {
        let mut port = ConsolePort::new(Cursor::new(b"1\n".to_vec()), FailingWriter);
        port.notify(&GameEvent::GameOver);
        assert!(matches!(port.request_choice(2), Err(GameError::Io(_))));
    }
}
