//! Repositorios de acceso a datos
//!
//! Cada repositorio encapsula el SQL de su entidad. Las operaciones
//! mutantes corren pre-chequeos y escritura en una misma transacción;
//! los índices únicos del schema son el respaldo autoritativo.

pub mod customer_repository;
pub mod employee_repository;
pub mod manufacturer_repository;
pub mod rental_repository;
pub mod vehicle_repository;

/// Soporte compartido para los tests de integración contra Postgres.
/// Los tests se saltan silenciosamente si `DATABASE_URL` no está definida.
#[cfg(test)]
pub(crate) mod testing {
    use sqlx::postgres::PgPoolOptions;
    use sqlx::PgPool;
    use uuid::Uuid;

    use super::customer_repository::{CustomerRepository, NewCustomer};
    use super::employee_repository::{EmployeeRepository, NewEmployee};
    use super::manufacturer_repository::ManufacturerRepository;
    use super::vehicle_repository::{NewVehicle, VehicleRepository};
    use crate::models::{customer::Customer, employee::Employee, vehicle::Vehicle};

    pub async fn pool() -> Option<PgPool> {
        let url = std::env::var("DATABASE_URL").ok()?;
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&url)
            .await
            .ok()?;
        sqlx::migrate!("./migrations").run(&pool).await.ok()?;
        Some(pool)
    }

    /// CPF sintético de 11 dígitos, único por invocación
    pub fn unique_tax_id() -> String {
        let digits = format!("{:039}", Uuid::new_v4().as_u128());
        digits[digits.len() - 11..].to_string()
    }

    /// El schema solo exige unicidad y largo máximo, así que la placa
    /// sintética prioriza entropía sobre el formato real
    pub fn unique_plate() -> String {
        Uuid::new_v4().simple().to_string()[..8].to_uppercase()
    }

    pub fn unique_email(prefix: &str) -> String {
        format!("{}-{}@ejemplo.com", prefix, Uuid::new_v4().simple())
    }

    pub async fn seed_customer(pool: &PgPool) -> Customer {
        CustomerRepository::new(pool.clone())
            .create(NewCustomer {
                name: "Cliente de prueba".to_string(),
                tax_id: unique_tax_id(),
                email: unique_email("cliente"),
            })
            .await
            .unwrap()
    }

    pub async fn seed_employee(pool: &PgPool) -> Employee {
        EmployeeRepository::new(pool.clone())
            .create(NewEmployee {
                name: "Empleado de prueba".to_string(),
                tax_id: unique_tax_id(),
                role: "Atención".to_string(),
                email: unique_email("empleado"),
            })
            .await
            .unwrap()
    }

    pub async fn seed_vehicle(pool: &PgPool) -> Vehicle {
        let manufacturer = ManufacturerRepository::new(pool.clone())
            .create(format!("Fabricante {}", Uuid::new_v4().simple()))
            .await
            .unwrap();

        VehicleRepository::new(pool.clone())
            .create(NewVehicle {
                model: "Modelo de prueba".to_string(),
                year: 2022,
                odometer: 10_000.0,
                plate: unique_plate(),
                manufacturer_id: manufacturer.id,
            })
            .await
            .unwrap()
    }
}
