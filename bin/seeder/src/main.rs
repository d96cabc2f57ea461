use diesel::pg::PgConnection;
use diesel::prelude::*;
use dotenvy::dotenv;
use std::env;
use velosdrop_primitives::models::{Driver, NewDriver};

fn establish_connection() -> PgConnection {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    PgConnection::establish(&database_url)
        .unwrap_or_else(|_| panic!("Error connecting to {}", database_url))
}

fn main() {
    dotenv().ok();
    println!("🌱 Seeding database...");

    let mut conn = establish_connection();

    // 1. Clean DB
    clean_db(&mut conn);

    // 2. Seed demo drivers
    seed_driver(&mut conn, "Amara", "Okafor", "amara@velosdrop.test", 50_000); // $500.00
    seed_driver(&mut conn, "Dejan", "Petrov", "dejan@velosdrop.test", 0);

    println!("✅ Database seeded successfully!");
}

fn clean_db(conn: &mut PgConnection) {
    use diesel::sql_query;
    println!("🧹 Cleaning database...");
    sql_query("TRUNCATE drivers, driver_transactions RESTART IDENTITY CASCADE")
        .execute(conn)
        .expect("Error truncating tables");
}

fn seed_driver(
    conn: &mut PgConnection,
    d_first_name: &str,
    d_last_name: &str,
    d_email: &str,
    d_balance: i64,
) -> i64 {
    use velosdrop_primitives::schema::drivers;

    // Check if driver exists
    let existing = drivers::table
        .filter(drivers::email.eq(d_email))
        .first::<Driver>(conn)
        .optional()
        .unwrap();

    if let Some(driver) = existing {
        println!("Driver {} already exists", d_email);
        return driver.id;
    }

    let new_driver = NewDriver {
        first_name: d_first_name,
        last_name: d_last_name,
        email: d_email,
        phone_number: "+15550100",
        balance: d_balance,
    };

    let inserted: Driver = diesel::insert_into(drivers::table)
        .values(&new_driver)
        .get_result(conn)
        .expect("Error inserting driver");

    println!("Created driver: {}", d_email);
    inserted.id
}
