//! Reservas CLI
//!
//! Command-line interface for the restaurant reservation API:
//! - Today's dashboard
//! - Tables, customers and reservations (list, create, update, delete)
//! - Reservation status changes and availability checks

use anyhow::{anyhow, bail, Context};
use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::collections::HashSet;
use std::io::Write;
use std::path::PathBuf;

use reservas::api::{ApiClient, ClientError};
use reservas::config::Config;
use reservas::format::{display_date, format_api_time, parse_api_date, parse_api_time};
use reservas::models::{
    filter_by_status, AvailabilityQuery, Customer, CustomerUpdate, DashboardData, Reservation,
    ReservationUpdate, Table, TableUpdate,
};
use reservas::status::{ReservationStatus, StatusAction};
use reservas::validation::{CustomerForm, ReservationForm, TableForm};

#[derive(Parser)]
#[command(name = "reservas-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Restaurant reservation management")]
#[command(long_about = "Manage tables, customers and reservations of the restaurant\nthrough the reservation REST API.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Config file (default: ~/.config/reservas/config.toml or ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Today's reservations and overall counters
    Dashboard,

    /// Manage tables
    #[command(alias = "tables")]
    Mesas {
        #[command(subcommand)]
        command: MesaCommand,
    },

    /// Manage customers
    #[command(alias = "customers")]
    Clientes {
        #[command(subcommand)]
        command: ClienteCommand,
    },

    /// Manage reservations
    #[command(alias = "reservations")]
    Reservas {
        #[command(subcommand)]
        command: ReservaCommand,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum MesaCommand {
    /// List tables
    List {
        /// Only tables flagged as available
        #[arg(long)]
        disponibles: bool,
        /// Only tables seating at least this many people
        #[arg(long)]
        capacidad_minima: Option<u32>,
    },
    /// Create a table
    Create {
        /// Table number (default: next free number)
        #[arg(long)]
        numero: Option<String>,
        #[arg(long, default_value = "2")]
        capacidad: String,
        #[arg(long)]
        ubicacion: String,
        /// Create the table as not available
        #[arg(long)]
        no_disponible: bool,
    },
    /// Update a table
    Update {
        id: u32,
        #[arg(long)]
        numero: Option<String>,
        #[arg(long)]
        capacidad: Option<String>,
        #[arg(long)]
        ubicacion: Option<String>,
        #[arg(long)]
        disponible: Option<bool>,
    },
    /// Delete a table
    Delete { id: u32 },
}

#[derive(Subcommand)]
pub enum ClienteCommand {
    /// List customers, optionally searching by name
    List {
        #[arg(long)]
        buscar: Option<String>,
    },
    /// Frequent customers
    Frecuentes,
    /// Reservation history of a customer
    Historial { id: u32 },
    /// Register a customer
    Create {
        #[arg(long)]
        nombre: String,
        #[arg(long)]
        apellido: String,
        #[arg(long)]
        telefono: String,
        #[arg(long)]
        email: String,
    },
    /// Update a customer
    Update {
        id: u32,
        #[arg(long)]
        nombre: Option<String>,
        #[arg(long)]
        apellido: Option<String>,
        #[arg(long)]
        telefono: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ReservaCommand {
    /// List reservations
    List {
        /// Only this date (YYYY-MM-DD)
        #[arg(long)]
        fecha: Option<String>,
        /// Only this status (pendiente, confirmada, cancelada, completada)
        #[arg(long)]
        estado: Option<ReservationStatus>,
    },
    /// Today's reservations
    Hoy,
    /// Reservation counters
    Estadisticas,
    /// Tables free for a date, time and party size
    Disponibilidad {
        #[arg(long)]
        fecha: String,
        #[arg(long)]
        hora: String,
        #[arg(long, default_value = "2")]
        personas: String,
    },
    /// Book a table
    Create {
        #[arg(long)]
        fecha: String,
        #[arg(long)]
        hora: String,
        #[arg(long, default_value = "2")]
        personas: String,
        /// Customer id
        #[arg(long)]
        cliente: u32,
        /// Table id (must be free at that date and time)
        #[arg(long)]
        mesa: u32,
        #[arg(long)]
        notas: Option<String>,
    },
    /// Update a reservation
    Update {
        id: u32,
        #[arg(long)]
        fecha: Option<String>,
        #[arg(long)]
        hora: Option<String>,
        #[arg(long)]
        personas: Option<u32>,
        #[arg(long)]
        cliente: Option<u32>,
        #[arg(long)]
        mesa: Option<u32>,
        #[arg(long)]
        notas: Option<String>,
    },
    /// Confirm a pending reservation
    Confirmar { id: u32 },
    /// Cancel a reservation
    Cancelar { id: u32 },
    /// Mark a confirmed reservation as completed
    Completar { id: u32 },
    /// Delete a reservation
    Delete { id: u32 },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    if let Err(e) = reservas::logging::init(&config.logging) {
        eprintln!("Logging disabled: {}", e);
    }
    tracing::debug!(base_url = %config.api.base_url, "Using reservation API");

    let client = ApiClient::new(config.api.client_config())?;
    let format = cli.format;

    match cli.command {
        Commands::Dashboard => {
            let data = client
                .dashboard()
                .await
                .map_err(|e| failed_with(e, DashboardData::LOAD_ERROR))?;

            match format {
                OutputFormat::Json => print_json(&data)?,
                OutputFormat::Csv => reservation_listing(&data.today).print_csv()?,
                OutputFormat::Table => {
                    println!("Dashboard del Restaurante");
                    println!();
                    println!("  Total:        {}", data.stats.total);
                    for status in ReservationStatus::ALL {
                        println!("  {:<13} {}", format!("{}:", status.label()), data.stats.count(status));
                    }
                    println!();
                    println!("Reservas de Hoy");
                    reservation_listing(&data.today).print_table("No hay reservas para hoy");
                }
            }
        }

        Commands::Mesas { command } => run_tables(&client, format, command).await?,
        Commands::Clientes { command } => run_customers(&client, format, command).await?,
        Commands::Reservas { command } => run_reservations(&client, format, command).await?,

        Commands::Config { output } => {
            let config = reservas::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

async fn run_tables(client: &ApiClient, format: OutputFormat, command: MesaCommand) -> anyhow::Result<()> {
    const LOAD_FAILED: &str = "Error al cargar las mesas";
    const SAVE_FAILED: &str = "Error al guardar la mesa";

    match command {
        MesaCommand::List {
            disponibles,
            capacidad_minima,
        } => {
            let tables = match (disponibles, capacidad_minima) {
                (true, _) => client.available_tables().await,
                (false, Some(min)) => client.tables_with_capacity(min).await,
                (false, None) => client.list_tables().await,
            }
            .map_err(|e| failed(e, LOAD_FAILED))?;

            let tables: Vec<Table> = match capacidad_minima {
                Some(min) if disponibles => tables.into_iter().filter(|t| t.capacity >= min).collect(),
                _ => tables,
            };
            emit(format, &tables, table_listing(&tables), "No hay mesas registradas")?;
        }

        MesaCommand::Create {
            numero,
            capacidad,
            ubicacion,
            no_disponible,
        } => {
            let existing = client.list_tables().await.map_err(|e| failed(e, LOAD_FAILED))?;
            let mut form = TableForm::for_new(&existing);
            if let Some(numero) = numero {
                form.number = numero;
            }
            form.capacity = capacidad;
            form.location = ubicacion;
            form.available = !no_disponible;

            let table = form.validate()?;
            let created = client
                .create_table(&table)
                .await
                .map_err(|e| failed(e, SAVE_FAILED))?;
            report(format, &created, || format!("Mesa {} creada (id {})", created.number, created.id))?;
        }

        MesaCommand::Update {
            id,
            numero,
            capacidad,
            ubicacion,
            disponible,
        } => {
            let existing = client.list_tables().await.map_err(|e| failed(e, LOAD_FAILED))?;
            let current = existing
                .iter()
                .find(|t| t.id == id)
                .ok_or_else(|| anyhow!("No existe la mesa con id {}", id))?;

            let mut form = TableForm::from_table(current);
            if let Some(numero) = numero {
                form.number = numero;
            }
            if let Some(capacidad) = capacidad {
                form.capacity = capacidad;
            }
            if let Some(ubicacion) = ubicacion {
                form.location = ubicacion;
            }
            if let Some(disponible) = disponible {
                form.available = disponible;
            }

            let update = TableUpdate::from(form.validate()?);
            let updated = client
                .update_table(id, &update)
                .await
                .map_err(|e| failed(e, SAVE_FAILED))?;
            report(format, &updated, || format!("Mesa {} actualizada", updated.number))?;
        }

        MesaCommand::Delete { id } => {
            client
                .delete_table(id)
                .await
                .map_err(|e| failed(e, "Error al eliminar la mesa"))?;
            println!("Mesa {} eliminada", id);
        }
    }

    Ok(())
}

async fn run_customers(
    client: &ApiClient,
    format: OutputFormat,
    command: ClienteCommand,
) -> anyhow::Result<()> {
    match command {
        ClienteCommand::List { buscar } => {
            let (customers, frequent) = match buscar.as_deref() {
                Some(term) if !term.trim().is_empty() => {
                    let found = client
                        .search_customers(term)
                        .await
                        .map_err(|e| failed(e, "Error en la búsqueda"))?;
                    let frequent = client
                        .frequent_customers()
                        .await
                        .map_err(|e| failed(e, "Error al cargar los datos"))?;
                    (found, frequent)
                }
                _ => client
                    .customer_overview()
                    .await
                    .map_err(|e| failed(e, "Error al cargar los datos"))?,
            };

            let frequent: HashSet<u32> = frequent.iter().map(|c| c.id).collect();
            emit(
                format,
                &customers,
                customer_listing(&customers, &frequent),
                "No se encontraron clientes",
            )?;
        }

        ClienteCommand::Frecuentes => {
            let frequent = client
                .frequent_customers()
                .await
                .map_err(|e| failed(e, "Error al cargar los datos"))?;
            let ids: HashSet<u32> = frequent.iter().map(|c| c.id).collect();
            emit(
                format,
                &frequent,
                customer_listing(&frequent, &ids),
                "No hay clientes frecuentes",
            )?;
        }

        ClienteCommand::Historial { id } => {
            let history = client
                .customer_history(id)
                .await
                .map_err(|e| failed(e, "Error al cargar el historial"))?;
            emit(
                format,
                &history,
                reservation_listing(&history),
                "No hay reservas en el historial",
            )?;
        }

        ClienteCommand::Create {
            nombre,
            apellido,
            telefono,
            email,
        } => {
            let form = CustomerForm {
                first_name: nombre,
                last_name: apellido,
                phone: telefono,
                email,
            };
            let customer = form.validate()?;
            let created = client
                .create_customer(&customer)
                .await
                .map_err(|e| failed(e, "Error al crear el cliente"))?;
            report(format, &created, || {
                format!("Cliente {} registrado (id {})", created.full_name(), created.id)
            })?;
        }

        ClienteCommand::Update {
            id,
            nombre,
            apellido,
            telefono,
            email,
        } => {
            let customers = client
                .list_customers()
                .await
                .map_err(|e| failed(e, "Error al cargar los datos"))?;
            let current = customers
                .iter()
                .find(|c| c.id == id)
                .ok_or_else(|| anyhow!("No existe el cliente con id {}", id))?;

            let mut form = CustomerForm::from_customer(current);
            if let Some(nombre) = nombre {
                form.first_name = nombre;
            }
            if let Some(apellido) = apellido {
                form.last_name = apellido;
            }
            if let Some(telefono) = telefono {
                form.phone = telefono;
            }
            if let Some(email) = email {
                form.email = email;
            }

            let valid = form.validate()?;
            let update = CustomerUpdate {
                first_name: Some(valid.first_name),
                last_name: Some(valid.last_name),
                phone: Some(valid.phone),
                email: Some(valid.email),
            };
            let updated = client
                .update_customer(id, &update)
                .await
                .map_err(|e| failed(e, "Error al actualizar el cliente"))?;
            report(format, &updated, || format!("Cliente {} actualizado", updated.full_name()))?;
        }
    }

    Ok(())
}

async fn run_reservations(
    client: &ApiClient,
    format: OutputFormat,
    command: ReservaCommand,
) -> anyhow::Result<()> {
    const LOAD_FAILED: &str = "Error al cargar las reservas";

    match command {
        ReservaCommand::List { fecha, estado } => {
            let all = match fecha.as_deref() {
                Some(fecha) => {
                    let date = parse_api_date(fecha)?;
                    client.reservations_on(date).await
                }
                None => client.list_reservations().await,
            }
            .map_err(|e| failed(e, LOAD_FAILED))?;

            let shown = filter_by_status(&all, estado);
            emit(format, &shown, reservation_listing(&shown), "No se encontraron reservas")?;
        }

        ReservaCommand::Hoy => {
            let today = client
                .reservations_today()
                .await
                .map_err(|e| failed(e, LOAD_FAILED))?;
            emit(format, &today, reservation_listing(&today), "No hay reservas para hoy")?;
        }

        ReservaCommand::Estadisticas => {
            let stats = client
                .statistics()
                .await
                .map_err(|e| failed(e, "Error al cargar las estadísticas"))?;

            let mut listing = Listing::new(&["Estado", "Reservas"]);
            listing.push(vec!["Total".to_string(), stats.total.to_string()]);
            for status in ReservationStatus::ALL {
                listing.push(vec![status.label().to_string(), stats.count(status).to_string()]);
            }
            emit(format, &stats, listing, "")?;
        }

        ReservaCommand::Disponibilidad {
            fecha,
            hora,
            personas,
        } => {
            let form = ReservationForm {
                date: fecha,
                time: hora,
                party_size: personas,
                ..ReservationForm::default()
            };
            let query = form
                .availability_query()
                .context("Fecha, hora y número de personas son requeridos")?;
            let response = check_availability(client, &query).await?;
            emit(
                format,
                &response.tables,
                table_listing(&response.tables),
                "No hay mesas disponibles para los criterios seleccionados",
            )?;
        }

        ReservaCommand::Create {
            fecha,
            hora,
            personas,
            cliente,
            mesa,
            notas,
        } => {
            let form = ReservationForm {
                date: fecha,
                time: hora,
                party_size: personas,
                customer_id: Some(cliente),
                table_id: Some(mesa),
                notes: notas.unwrap_or_default(),
            };
            let reservation = form.validate(Local::now().date_naive())?;

            let query = AvailabilityQuery {
                date: reservation.date,
                time: reservation.time,
                party_size: reservation.party_size,
            };
            let available = check_availability(client, &query).await?;
            if !available.tables.iter().any(|t| t.id == mesa) {
                bail!(
                    "La mesa {} no está disponible el {} a las {}",
                    mesa,
                    display_date(query.date),
                    format_api_time(query.time)
                );
            }

            let created = client
                .create_reservation(&reservation)
                .await
                .map_err(|e| failed(e, "Error al crear la reserva"))?;
            report(format, &created, || format!("¡Reserva creada exitosamente! (id {})", created.id))?;
        }

        ReservaCommand::Update {
            id,
            fecha,
            hora,
            personas,
            cliente,
            mesa,
            notas,
        } => {
            let update = ReservationUpdate {
                date: fecha.as_deref().map(parse_api_date).transpose()?,
                time: hora.as_deref().map(parse_api_time).transpose()?,
                party_size: personas,
                customer_id: cliente,
                table_id: mesa,
                notes: notas,
            };
            if update == ReservationUpdate::default() {
                bail!("Nothing to update: pass at least one field");
            }

            let updated = client
                .update_reservation(id, &update)
                .await
                .map_err(|e| failed(e, "Error al actualizar la reserva"))?;
            report(format, &updated, || format!("Reserva {} actualizada", updated.id))?;
        }

        ReservaCommand::Confirmar { id } => {
            change_status(client, format, id, StatusAction::Confirm).await?
        }
        ReservaCommand::Cancelar { id } => {
            change_status(client, format, id, StatusAction::Cancel).await?
        }
        ReservaCommand::Completar { id } => {
            change_status(client, format, id, StatusAction::Complete).await?
        }

        ReservaCommand::Delete { id } => {
            client
                .delete_reservation(id)
                .await
                .map_err(|e| failed(e, "Error al eliminar la reserva"))?;
            println!("Reserva {} eliminada", id);
        }
    }

    Ok(())
}

async fn check_availability(
    client: &ApiClient,
    query: &AvailabilityQuery,
) -> anyhow::Result<reservas::models::AvailabilityResponse> {
    client
        .check_availability(query)
        .await
        .map_err(|e| failed(e, "Error al verificar la disponibilidad"))
}

async fn change_status(
    client: &ApiClient,
    format: OutputFormat,
    id: u32,
    action: StatusAction,
) -> anyhow::Result<()> {
    let updated = client
        .apply_action(id, action)
        .await
        .map_err(|e| failed(e, &action.failure_message()))?;
    report(format, &updated, || {
        format!("Reserva {}: {}", updated.id, updated.status.label())
    })
}

/// Turn a client error into the message a user should see
fn failed(error: ClientError, fallback: &str) -> anyhow::Error {
    match &error {
        ClientError::Api {
            message: Some(_), ..
        } => anyhow!(error.user_message(fallback)),
        _ => anyhow::Error::new(error).context(fallback.to_string()),
    }
}

/// Like `failed`, but always reports `message`; the cause is only logged
fn failed_with(error: ClientError, message: &str) -> anyhow::Error {
    tracing::warn!(error = %error, "{}", message);
    anyhow!(message.to_string())
}

// ============================================
// Output
// ============================================

/// Rows shared by the table and CSV renderings
struct Listing {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Listing {
    fn new(headers: &[&'static str]) -> Self {
        Self {
            headers: headers.to_vec(),
            rows: Vec::new(),
        }
    }

    fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn render_table(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let line = |cells: Vec<&str>| -> String {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:<width$}", cell, width = width))
                .collect::<Vec<_>>()
                .join(" | ")
                .trim_end()
                .to_string()
        };

        let mut out = String::new();
        out.push_str(&line(self.headers.clone()));
        out.push('\n');
        out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1)));
        out.push('\n');
        for row in &self.rows {
            out.push_str(&line(row.iter().map(String::as_str).collect()));
            out.push('\n');
        }
        out
    }

    fn print_table(&self, empty: &str) {
        if self.rows.is_empty() {
            println!("{}", empty);
        } else {
            print!("{}", self.render_table());
        }
    }

    fn write_csv<W: Write>(&self, writer: W) -> csv::Result<()> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn print_csv(&self) -> csv::Result<()> {
        self.write_csv(std::io::stdout().lock())
    }
}

fn table_listing(tables: &[Table]) -> Listing {
    let mut listing = Listing::new(&["ID", "Mesa", "Capacidad", "Ubicación", "Estado"]);
    for table in tables {
        let (availability, _) = reservas::status::availability_badge(table.available);
        listing.push(vec![
            table.id.to_string(),
            table.number.to_string(),
            table.capacity.to_string(),
            table.location.clone(),
            availability.to_string(),
        ]);
    }
    listing
}

fn customer_listing(customers: &[Customer], frequent: &HashSet<u32>) -> Listing {
    let mut listing = Listing::new(&["ID", "Nombre", "Teléfono", "Email", "Visitas", "Frecuente"]);
    for customer in customers {
        listing.push(vec![
            customer.id.to_string(),
            customer.full_name(),
            customer.phone.clone(),
            customer.email.clone(),
            customer.visit_count.to_string(),
            if frequent.contains(&customer.id) { "Cliente Frecuente" } else { "" }.to_string(),
        ]);
    }
    listing
}

fn reservation_listing(reservations: &[Reservation]) -> Listing {
    let mut listing = Listing::new(&[
        "ID", "Mesa", "Estado", "Cliente", "Fecha", "Hora", "Personas", "Ubicación", "Notas",
    ]);
    for reservation in reservations {
        listing.push(vec![
            reservation.id.to_string(),
            reservation.table_label(),
            reservation.status.label().to_string(),
            reservation.customer_name(),
            display_date(reservation.date),
            format_api_time(reservation.time),
            reservation.party_size.to_string(),
            reservation.location().to_string(),
            reservation.visible_notes().unwrap_or_default().to_string(),
        ]);
    }
    listing
}

fn print_json<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

fn emit<T: Serialize + ?Sized>(
    format: OutputFormat,
    data: &T,
    listing: Listing,
    empty: &str,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(data)?,
        OutputFormat::Csv => listing.print_csv()?,
        OutputFormat::Table => listing.print_table(empty),
    }
    Ok(())
}

/// Print a single created/updated record: JSON as-is, otherwise a summary line
fn report<T: Serialize>(
    format: OutputFormat,
    data: &T,
    summary: impl FnOnce() -> String,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(data),
        _ => {
            println!("{}", summary());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn reservation(id: u32, status: ReservationStatus) -> Reservation {
        Reservation {
            id,
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            time: NaiveTime::from_hms_opt(20, 30, 0).unwrap(),
            party_size: 4,
            status,
            notes: Some("Mesa junto a la ventana, por favor".to_string()),
            table_id: 3,
            customer_id: 9,
            table: None,
            customer: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from([
            "reservas-cli",
            "--format",
            "json",
            "reservas",
            "list",
            "--estado",
            "confirmada",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Reservas {
                command: ReservaCommand::List { fecha, estado },
            } => {
                assert!(fecha.is_none());
                assert_eq!(estado, Some(ReservationStatus::Confirmed));
            }
            _ => panic!("wrong command"),
        }

        let cli = Cli::try_parse_from(["reservas-cli", "tables", "delete", "4"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Mesas {
                command: MesaCommand::Delete { id: 4 }
            }
        ));

        assert!(Cli::try_parse_from(["reservas-cli", "reservas", "list", "--estado", "perdida"]).is_err());
    }

    #[test]
    fn test_reservation_listing_table() {
        let listing = reservation_listing(&[reservation(1, ReservationStatus::Pending)]);
        let rendered = listing.render_table();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID | Mesa"));
        assert!(lines[2].contains("Mesa #3"));
        assert!(lines[2].contains("Pendiente"));
        assert!(lines[2].contains("01/06/2024"));
        assert!(lines[2].contains("20:30"));
    }

    #[test]
    fn test_listing_csv_quotes_fields() {
        let listing = reservation_listing(&[reservation(1, ReservationStatus::Confirmed)]);
        let mut out = Vec::new();
        listing.write_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("ID,Mesa,Estado,Cliente,Fecha,Hora,Personas,Ubicación,Notas")
        );
        assert!(lines
            .next()
            .unwrap()
            .ends_with("\"Mesa junto a la ventana, por favor\""));
    }

    #[test]
    fn test_failed_prefers_server_message() {
        let err = failed(
            ClientError::Api {
                status: 409,
                message: Some("La mesa ya está reservada".to_string()),
            },
            "Error al crear la reserva",
        );
        assert_eq!(err.to_string(), "La mesa ya está reservada");

        let err = failed(ClientError::Timeout, "Error al crear la reserva");
        assert_eq!(err.to_string(), "Error al crear la reserva");
    }

    #[test]
    fn test_dashboard_failure_hides_server_text() {
        let err = failed_with(
            ClientError::Api {
                status: 500,
                message: Some("Internal server error".to_string()),
            },
            DashboardData::LOAD_ERROR,
        );
        assert_eq!(err.to_string(), "Error al cargar los datos del dashboard");

        let err = failed_with(ClientError::Timeout, DashboardData::LOAD_ERROR);
        assert_eq!(err.to_string(), DashboardData::LOAD_ERROR);
    }
}
