use std::sync::Arc;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::gateway::{
    ContractApi, ContractGateway, CoreGateway, GatewayError, PointApi, PointGateway,
};
use crate::services::point_service::PointTarget;
use crate::services::{ContractService, InvoiceService, PointService, SessionService};

/// Owns the view services and routes operator commands to them.
///
/// Navigation is gated on the session: apart from login, logout, help and
/// quit, every command requires a logged-in operator.
pub struct Controller {
    session_service: SessionService,
    contract_service: ContractService,
    point_service: PointService,
    invoice_service: InvoiceService,
}

impl Controller {
    pub fn new(config: &Config) -> std::result::Result<Self, GatewayError> {
        let core = Arc::new(CoreGateway::new(
            &config.gateway_url,
            config.request_timeout_secs,
        )?);
        let contract_gateway: Arc<dyn ContractApi> = Arc::new(ContractGateway::new(core.clone()));
        let point_gateway: Arc<dyn PointApi> = Arc::new(PointGateway::new(core.clone()));

        Ok(Self {
            session_service: SessionService::new(),
            contract_service: ContractService::new(contract_gateway.clone()),
            point_service: PointService::new(contract_gateway.clone(), point_gateway.clone()),
            invoice_service: InvoiceService::new(contract_gateway, point_gateway),
        })
    }

    /// Dispatch one operator input line. Returns false when the operator
    /// asked to quit.
    pub async fn process_command(&mut self, line: &str) -> bool {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&verb, args)) = tokens.split_first() else {
            return true;
        };

        match verb {
            "quit" | "exit" => return false,
            "help" => print_help(),
            "login" => self.handle_login(args),
            "logout" => {
                if let Some(session) = self.session_service.current() {
                    println!("Goodbye, {}.", session.operator);
                }
                self.session_service.logout();
            }
            _ if !self.session_service.is_logged_in() => {
                println!("Please log in first (login <id> <password>).");
            }
            "contracts" => {
                self.contract_service.load().await;
                self.render_contracts();
            }
            "contract" => self.handle_contract(args).await,
            "points" => {
                self.point_service.load_contracts().await;
                self.render_points();
            }
            "point" => self.handle_point(args).await,
            "invoice" => self.handle_invoice(args).await,
            _ => {
                tracing::warn!("Unknown command: {}", verb);
                println!("Unknown command: {} (try 'help')", verb);
            }
        }

        true
    }

    fn handle_login(&mut self, args: &[&str]) {
        let operator = args.first().copied().unwrap_or_default();
        let password = args.get(1).copied().unwrap_or_default();
        match self.session_service.login(operator, password) {
            Ok(session) => println!(
                "Logged in as {} at {}.",
                session.operator,
                session.logged_in_at.format("%H:%M:%S")
            ),
            Err(e) => println!("{}", e),
        }
    }

    async fn handle_contract(&mut self, args: &[&str]) {
        let result = match args {
            ["add"] => {
                self.contract_service.begin_add();
                self.render_contracts();
                Ok(())
            }
            ["edit", row] => match row.parse() {
                Ok(index) => self.contract_service.begin_edit(index).map(|_| {
                    self.render_contracts();
                }),
                Err(_) => Err(AppError::Validation(format!("Invalid row: {}", row))),
            },
            ["set", field, rest @ ..] => self
                .contract_service
                .set_field(field, &rest.join(" ")),
            ["save"] => match self.contract_service.editing_row() {
                Some(index) => {
                    let result = self.contract_service.save(index).await;
                    self.render_contracts();
                    result
                }
                None => Err(AppError::NoActiveEdit),
            },
            ["cancel"] => {
                self.contract_service.cancel();
                self.render_contracts();
                Ok(())
            }
            ["delete", id] => match id.parse() {
                Ok(id) => {
                    let result = self.contract_service.delete(id).await;
                    self.render_contracts();
                    result
                }
                Err(_) => Err(AppError::Validation(format!("Invalid contract id: {}", id))),
            },
            _ => {
                println!("Usage: contract add|edit <row>|set <field> <value>|save|cancel|delete <id>");
                Ok(())
            }
        };
        notify(result);
    }

    async fn handle_point(&mut self, args: &[&str]) {
        let result = match args {
            ["select", id] => match id.parse() {
                Ok(id) => {
                    let result = self.point_service.select_contract(id).await;
                    self.render_points();
                    result
                }
                Err(_) => Err(AppError::Validation(format!("Invalid contract id: {}", id))),
            },
            ["add"] => self.point_service.begin_add(),
            ["edit", id] => match id.parse() {
                Ok(id) => self.point_service.begin_edit(id),
                Err(_) => Err(AppError::Validation(format!("Invalid point id: {}", id))),
            },
            ["set", field, rest @ ..] => self.point_service.set_field(field, &rest.join(" ")),
            ["save"] => {
                let result = self.point_service.save().await;
                self.render_points();
                result
            }
            ["cancel"] => {
                self.point_service.cancel();
                Ok(())
            }
            ["delete", id] => match id.parse() {
                Ok(id) => {
                    let result = self.point_service.delete(id).await;
                    self.render_points();
                    result
                }
                Err(_) => Err(AppError::Validation(format!("Invalid point id: {}", id))),
            },
            _ => {
                println!("Usage: point select <contract>|add|edit <id>|set <field> <value>|save|cancel|delete <id>");
                Ok(())
            }
        };
        notify(result);
    }

    async fn handle_invoice(&mut self, args: &[&str]) {
        let result = match args {
            [] => {
                self.invoice_service.load().await;
                self.render_invoice();
                Ok(())
            }
            ["open", id] => match id.parse() {
                Ok(id) => {
                    let result = self.invoice_service.open_popup(id).await;
                    self.render_invoice_popup();
                    result
                }
                Err(_) => Err(AppError::Validation(format!("Invalid contract id: {}", id))),
            },
            ["close"] => {
                self.invoice_service.close_popup();
                Ok(())
            }
            _ => {
                println!("Usage: invoice [open <contract>|close]");
                Ok(())
            }
        };
        notify(result);
    }

    fn render_contracts(&self) {
        println!(
            "{:<5} {:<8} {:<24} {:<12} {:<12}",
            "Row", "Id", "Contract Name", "Start Date", "End Date"
        );
        for (index, row) in self.contract_service.rows().iter().enumerate() {
            if self.contract_service.editing_row() == Some(index) {
                let draft = self.contract_service.draft().cloned().unwrap_or_default();
                println!(
                    "{:<5} {:<8} {:<24} {:<12} {:<12} [editing]",
                    index,
                    row.id.map_or("-".to_string(), |id| id.to_string()),
                    draft.contract_name,
                    draft.start_date,
                    draft.end_date
                );
                if let Some(min) = self.contract_service.min_end_date() {
                    println!("      (end date should not be before {})", min);
                }
            } else {
                println!(
                    "{:<5} {:<8} {:<24} {:<12} {:<12}",
                    index,
                    row.id.map_or("-".to_string(), |id| id.to_string()),
                    row.contract_name,
                    row.start_date,
                    row.end_date
                );
            }
        }
        if let Some(error) = self.contract_service.error() {
            println!("! {}", error);
        }
    }

    fn render_points(&self) {
        println!("Contracts:");
        for contract in self.point_service.contracts() {
            println!(
                "  {:<8} {}",
                contract.id.map_or("-".to_string(), |id| id.to_string()),
                contract.contract_name
            );
        }

        match self.point_service.selected_contract() {
            Some(contract_id) => {
                println!("Selected contract: {}", contract_id);
                println!("{:<8} {:<24} {:<12}", "Id", "Point", "Value");
                for point in self.point_service.points() {
                    let editing = self.point_service.editing()
                        == Some(PointTarget::Existing(point.id));
                    println!(
                        "{:<8} {:<24} {:<12}{}",
                        point.id,
                        point.point,
                        point.value,
                        if editing { " [editing]" } else { "" }
                    );
                }
                if let Some(draft) = self.point_service.draft() {
                    println!("Draft: point='{}' value='{}'", draft.point, draft.value);
                }
            }
            None => println!("No contract selected (point select <contract>)."),
        }
    }

    fn render_invoice(&self) {
        println!(
            "{:<8} {:<24} {:<14} {:<14}",
            "Id", "Contract Name", "Total Points", "Total Value"
        );
        for contract in self.invoice_service.contracts() {
            println!(
                "{:<8} {:<24} {:<14} {:<14}",
                contract.id, contract.contract_name, contract.total_points, contract.total_value
            );
        }
    }

    fn render_invoice_popup(&self) {
        let Some(popup) = self.invoice_service.popup() else {
            return;
        };
        println!("Contract: {}", popup.contract.contract_name);
        println!("{:<24} {:<12}", "Point", "Value");
        for point in &popup.points {
            println!("{:<24} {:<12}", point.point, point.value);
        }
        println!("Total Value: {}", popup.total_value);
    }
}

/// Surface a failed command to the operator. Validation errors come back
/// through here too so the message appears right below the re-rendered view.
fn notify(result: Result<()>) {
    if let Err(e) = result {
        println!("ERROR: {}", e);
    }
}

fn print_help() {
    println!("Commands:");
    println!("  login <id> <password> / logout / quit");
    println!("  contracts");
    println!("  contract add|edit <row>|set <field> <value>|save|cancel|delete <id>");
    println!("  points");
    println!("  point select <contract>|add|edit <id>|set <field> <value>|save|cancel|delete <id>");
    println!("  invoice [open <contract>|close]");
}
