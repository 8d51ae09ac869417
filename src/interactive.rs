//! Interactive menu.
//!
//! Reads answers line by line from any `BufRead` so it can be driven from a
//! terminal or from a test buffer. End of input quits like choice `0`.

use crate::actions::{run_analyze, run_export, run_locate, run_split};
use crate::config::Config;
use crate::error::{ErrorKind, SubnetError};
use crate::models::parse::{parse_addr, parse_prefix};
use crate::models::{AddressSpace, Goal};
use crate::output::{write_headline, ExportFormat, Ui};
use crate::processing::plan;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::net::Ipv4Addr;

/// Formats written when the user agrees to export.
const MENU_EXPORT_FORMATS: [ExportFormat; 2] = [ExportFormat::Markdown, ExportFormat::Csv];

enum Flow {
    Continue,
    Quit,
}

pub struct Menu<R, W> {
    input: R,
    out: W,
    ui: Ui,
    config: Config,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, out: W, ui: Ui, config: Config) -> Menu<R, W> {
        Menu {
            input,
            out,
            ui,
            config,
        }
    }

    /// Hand back the output sink, used by tests to inspect what was printed.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Loop over the menu until the user quits or input ends.
    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        write_headline(&mut self.out, self.ui, "IPv4 Subnetting Tool")?;
        writeln!(self.out, "Hint: start with --no-color to disable colors.")?;
        writeln!(self.out)?;

        loop {
            writeln!(self.out, "{}", self.ui.head("Menu:"))?;
            writeln!(self.out, "  1) Split a network into N subnets")?;
            writeln!(self.out, "  2) Split a network to a target prefix /xx")?;
            writeln!(self.out, "  3) Split a network by hosts per subnet")?;
            writeln!(self.out, "  4) IP -> subnet (inside a base network)")?;
            writeln!(self.out, "  5) Analyze a subnet")?;
            writeln!(self.out, "  0) Quit")?;

            let Some(choice) = self.prompt("\nChoice: ")? else {
                break;
            };
            let flow = match choice.as_str() {
                "1" => self.action_split_by_count()?,
                "2" => self.action_split_by_prefix()?,
                "3" => self.action_split_by_hosts()?,
                "4" => self.action_ip_in_subnet()?,
                "5" => self.action_analyze()?,
                "0" => break,
                _ => {
                    let msg = self.ui.err("Invalid choice, please pick 0-5.");
                    writeln!(self.out, "{msg}")?;
                    Flow::Continue
                }
            };
            if let Flow::Quit = flow {
                break;
            }
            writeln!(self.out)?;
        }

        writeln!(self.out, "{}", self.ui.ok("Bye. Happy subnetting."))?;
        Ok(())
    }

    fn action_split_by_count(&mut self) -> Result<Flow, Box<dyn Error>> {
        write_headline(&mut self.out, self.ui, "1) Split a network into N subnets")?;
        let Some(base) = self.ask_net("Base network (e.g. 192.168.1.0/24): ")? else {
            return Ok(Flow::Quit);
        };
        let Some(n) = self.ask_int("How many subnets do you need (N)?: ", 1)? else {
            return Ok(Flow::Quit);
        };
        self.split_and_offer_export(base, Goal::ByCount(n))
    }

    fn action_split_by_prefix(&mut self) -> Result<Flow, Box<dyn Error>> {
        write_headline(
            &mut self.out,
            self.ui,
            "2) Split a network to a target prefix /xx",
        )?;
        let Some(base) = self.ask_net("Base network (e.g. 10.0.0.0/16): ")? else {
            return Ok(Flow::Quit);
        };
        let Some(prefix) = self.ask_prefix("Target prefix (e.g. 24): ")? else {
            return Ok(Flow::Quit);
        };
        self.split_and_offer_export(base, Goal::ByPrefix(prefix))
    }

    fn action_split_by_hosts(&mut self) -> Result<Flow, Box<dyn Error>> {
        write_headline(
            &mut self.out,
            self.ui,
            "3) Split a network by hosts per subnet",
        )?;
        let Some(base) = self.ask_net("Base network (e.g. 172.16.0.0/20): ")? else {
            return Ok(Flow::Quit);
        };
        let Some(hosts) = self.ask_int("Usable hosts needed per subnet: ", 1)? else {
            return Ok(Flow::Quit);
        };
        self.split_and_offer_export(base, Goal::ByHosts(hosts))
    }

    fn action_ip_in_subnet(&mut self) -> Result<Flow, Box<dyn Error>> {
        write_headline(
            &mut self.out,
            self.ui,
            "4) Which subnet does an IP belong to?",
        )?;
        let Some(base) = self.ask_net("Base network (e.g. 192.168.1.0/24): ")? else {
            return Ok(Flow::Quit);
        };
        let Some(prefix) = self.ask_prefix("Subnet prefix to check against (e.g. 27): ")? else {
            return Ok(Flow::Quit);
        };
        if let Err(e) = plan(base, Goal::ByPrefix(prefix)) {
            self.report(Box::new(e))?;
            return Ok(Flow::Continue);
        }
        let Some(ip) = self.ask_ip("IP address (e.g. 192.168.1.130): ")? else {
            return Ok(Flow::Quit);
        };
        if let Err(e) = run_locate(&mut self.out, self.ui, base, prefix, ip) {
            self.report(e)?;
        }
        Ok(Flow::Continue)
    }

    fn action_analyze(&mut self) -> Result<Flow, Box<dyn Error>> {
        write_headline(&mut self.out, self.ui, "5) Analyze a subnet")?;
        let Some(space) = self.ask_net("IP/CIDR (e.g. 192.168.1.10/27 or 10.0.0.0/8): ")? else {
            return Ok(Flow::Quit);
        };
        run_analyze(&mut self.out, self.ui, space)?;
        Ok(Flow::Continue)
    }

    fn split_and_offer_export(
        &mut self,
        base: AddressSpace,
        goal: Goal,
    ) -> Result<Flow, Box<dyn Error>> {
        let plan = match run_split(&mut self.out, self.ui, &self.config, base, goal, &[]) {
            Ok((plan, _)) => plan,
            Err(e) => {
                self.report(e)?;
                return Ok(Flow::Continue);
            }
        };
        let question = format!(
            "Export (Markdown + CSV) to {}? (y/n): ",
            self.config.export_dir.display()
        );
        match self.yes_no(&question)? {
            Some(true) => {
                if let Err(e) = run_export(
                    &mut self.out,
                    self.ui,
                    &self.config,
                    &plan,
                    goal,
                    &MENU_EXPORT_FORMATS,
                ) {
                    log::error!("Export failed: {e}");
                    let msg = self.ui.err(&format!("Export failed: {e}"));
                    writeln!(self.out, "{msg}")?;
                }
                Ok(Flow::Continue)
            }
            Some(false) => Ok(Flow::Continue),
            None => Ok(Flow::Quit),
        }
    }

    /// Print engine errors and carry on, give everything else back.
    fn report(&mut self, err: Box<dyn Error>) -> Result<(), Box<dyn Error>> {
        let Some(subnet_err) = err.downcast_ref::<SubnetError>() else {
            return Err(err);
        };
        log::debug!("rejected request: {subnet_err:?}");
        let msg = match subnet_err.kind() {
            ErrorKind::AddressNotFound => self.ui.warn(&subnet_err.to_string()),
            _ => self.ui.err(&format!("Not possible: {subnet_err}")),
        };
        writeln!(self.out, "{msg}")?;
        Ok(())
    }

    /// `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn ask_int(&mut self, text: &str, min: u64) -> io::Result<Option<u64>> {
        loop {
            let Some(raw) = self.prompt(text)? else {
                return Ok(None);
            };
            match raw.parse::<u64>() {
                Ok(v) if v >= min => return Ok(Some(v)),
                Ok(_) => {
                    let msg = self.ui.err(&format!("Invalid: number must be >= {min}."));
                    writeln!(self.out, "{msg}")?;
                }
                Err(_) => {
                    let msg = self.ui.err("Invalid number. Example: 8");
                    writeln!(self.out, "{msg}")?;
                }
            }
        }
    }

    fn ask_prefix(&mut self, text: &str) -> io::Result<Option<u8>> {
        self.ask_parsed(text, parse_prefix, "Example: 24")
    }

    fn ask_net(&mut self, text: &str) -> io::Result<Option<AddressSpace>> {
        self.ask_parsed(text, |raw| raw.parse::<AddressSpace>(), "Example: 192.168.1.0/24")
    }

    fn ask_ip(&mut self, text: &str) -> io::Result<Option<Ipv4Addr>> {
        self.ask_parsed(text, parse_addr, "Example: 10.0.0.5")
    }

    fn ask_parsed<T, F>(&mut self, text: &str, parse: F, example: &str) -> io::Result<Option<T>>
    where
        F: Fn(&str) -> Result<T, SubnetError>,
    {
        loop {
            let Some(raw) = self.prompt(text)? else {
                return Ok(None);
            };
            match parse(&raw) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => {
                    let msg = self.ui.err(&format!("{e}. {example}"));
                    writeln!(self.out, "{msg}")?;
                }
            }
        }
    }

    fn yes_no(&mut self, text: &str) -> io::Result<Option<bool>> {
        Ok(self.prompt(text)?.map(|answer| {
            answer
                .to_lowercase()
                .starts_with(['y', 'j', 's'])
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn run_menu(input: &str) -> String {
        run_menu_exporting_to(input, std::env::temp_dir().join("subnet-calc-menu-unused"))
    }

    fn run_menu_exporting_to(input: &str, export_dir: PathBuf) -> String {
        let config = Config {
            use_color: false,
            export_dir,
            display_limit: 8,
        };
        let mut menu = Menu::new(Cursor::new(input.to_string()), Vec::new(), Ui::plain(), config);
        menu.run().expect("menu failed");
        String::from_utf8(menu.into_output()).unwrap()
    }

    #[test]
    fn test_split_by_count_then_quit() {
        let text = run_menu("1\n192.168.1.0/24\n4\nn\n0\n");
        assert!(text.contains(" 3. 192.168.1.128/26"));
        assert!(text.contains("Magic number : 64 (in octet 4, mask value 192)"));
        assert!(text.ends_with("Bye. Happy subnetting.\n"));
    }

    #[test]
    fn test_reprompts_on_bad_input() {
        let text = run_menu("9\n1\nnot-a-net\n10.0.0.0/24\nzero\n0\n2\nn\n0\n");
        assert!(text.contains("Invalid choice, please pick 0-5."));
        assert!(text.contains("invalid IPv4 address: not-a-net. Example: 192.168.1.0/24"));
        assert!(text.contains("Invalid number. Example: 8"));
        assert!(text.contains("Invalid: number must be >= 1."));
        assert!(text.contains(" 2. 10.0.0.128/25"));
    }

    #[test]
    fn test_engine_error_keeps_menu_alive() {
        let text = run_menu("2\n172.16.0.0/22\n21\n3\n192.168.1.0/24\n500\n0\n");
        assert!(text.contains("Not possible: invalid goal: target prefix /21"));
        assert!(text.contains("Not possible: capacity exceeded"));
        assert!(text.ends_with("Bye. Happy subnetting.\n"));
    }

    #[test]
    fn test_ip_in_subnet() {
        let text = run_menu("4\n192.168.1.0/24\n/27\n192.168.1.130\n4\n192.168.1.0/24\n27\n10.1.1.1\n0\n");
        assert!(text.contains("Match: 192.168.1.130 lies in subnet 192.168.1.128/27"));
        assert!(text.contains("address 10.1.1.1 is not inside 192.168.1.0/24"));
    }

    #[test]
    fn test_analyze_and_end_of_input() {
        let text = run_menu("5\n10.0.0.7/31\n");
        assert!(text.contains("10.0.0.6/31"));
        assert!(text.contains("Host range : 10.0.0.6  -  10.0.0.7"));
        assert!(text.contains("Hosts      : 2"));
        assert!(text.ends_with("Bye. Happy subnetting.\n"));
    }

    #[test]
    fn test_end_of_input_mid_action() {
        let text = run_menu("3\n10.0.0.0/8\n");
        assert!(text.ends_with("Bye. Happy subnetting.\n"));
    }

    #[test]
    fn test_prefix_checked_before_asking_ip() {
        let text = run_menu("4\n172.16.0.0/22\n21\n0\n");
        assert!(text.contains("Not possible: invalid goal: target prefix /21"));
        assert!(!text.contains("IP address (e.g."));
        assert!(text.ends_with("Bye. Happy subnetting.\n"));
    }

    #[test]
    fn test_split_then_export_markdown_and_csv() {
        let dir = std::env::temp_dir().join(format!(
            "subnet-calc-menu-export-{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);

        let text = run_menu_exporting_to("1\n192.168.1.0/24\n4\ny\n0\n", dir.clone());

        let mut names: Vec<String> = std::fs::read_dir(&dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names.len(), 2);
        assert!(names[0].starts_with("subnet_by_count_") && names[0].ends_with(".csv"));
        assert!(names[1].starts_with("subnet_by_count_") && names[1].ends_with(".md"));

        let listed = text.split("Exported:\n").nth(1).expect("no export listing");
        for name in &names {
            assert!(listed.contains(&dir.join(name).display().to_string()));
        }
        let csv = std::fs::read_to_string(dir.join(&names[0])).unwrap();
        assert_eq!(csv.lines().count(), 5);
        assert!(csv.contains("192.168.1.192/26;"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
