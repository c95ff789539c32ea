//! Insert helpers for seeding test databases.
//!
//! Each function inserts one row with standard test values, taking only the
//! fields tests care about (unique keys, foreign keys, dates) and returning
//! the stored model.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Default plaintext password used by [`insert_usuario`].
pub static TEST_PASSWORD: &str = "contrasena123";

/// Shorthand for building test dates.
pub fn fecha(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Insert a usuario whose password is [`TEST_PASSWORD`].
///
/// Uses the minimum bcrypt cost; test fixtures don't need a slow hash.
pub async fn insert_usuario(
    db: &DatabaseConnection,
    email: &str,
) -> Result<entity::usuario::Model, DbErr> {
    let hash = bcrypt::hash(TEST_PASSWORD, 4)
        .map_err(|e| DbErr::Custom(format!("failed to hash test password: {e}")))?;

    let usuario = entity::usuario::ActiveModel {
        nombre_usuario: ActiveValue::Set("Usuario Prueba".to_string()),
        nombre_empresa: ActiveValue::Set("Ganadería Prueba SL".to_string()),
        email: ActiveValue::Set(email.to_string()),
        contrasena_hash: ActiveValue::Set(hash),
        ..Default::default()
    };

    usuario.insert(db).await
}

pub async fn insert_titular(
    db: &DatabaseConnection,
    nif: &str,
    id_usuario: i32,
) -> Result<entity::titular::Model, DbErr> {
    let titular = entity::titular::ActiveModel {
        nombre: ActiveValue::Set("Titular Prueba".to_string()),
        nif: ActiveValue::Set(nif.to_string()),
        domicilio: ActiveValue::Set("Calle Mayor 1".to_string()),
        localidad: ActiveValue::Set("Zamora".to_string()),
        provincia: ActiveValue::Set("Zamora".to_string()),
        codigo_postal: ActiveValue::Set("49001".to_string()),
        telefono: ActiveValue::Set("600000000".to_string()),
        id_usuario: ActiveValue::Set(id_usuario),
        ..Default::default()
    };

    titular.insert(db).await
}

pub async fn insert_explotacion(
    db: &DatabaseConnection,
    codigo: &str,
    id_titular: i32,
) -> Result<entity::explotacion::Model, DbErr> {
    let explotacion = entity::explotacion::ActiveModel {
        codigo: ActiveValue::Set(codigo.to_string()),
        nombre: ActiveValue::Set("Explotación Prueba".to_string()),
        direccion: ActiveValue::Set("Camino de la Dehesa s/n".to_string()),
        localidad: ActiveValue::Set("Toro".to_string()),
        provincia: ActiveValue::Set("Zamora".to_string()),
        codigo_postal: ActiveValue::Set("49800".to_string()),
        especies: ActiveValue::Set("Bovino".to_string()),
        coordenadas: ActiveValue::Set("41.52,-5.39".to_string()),
        id_titular: ActiveValue::Set(id_titular),
        ..Default::default()
    };

    explotacion.insert(db).await
}

pub async fn insert_parcela(
    db: &DatabaseConnection,
    id_explotacion: i32,
) -> Result<entity::parcela::Model, DbErr> {
    let parcela = entity::parcela::ActiveModel {
        coordenadas: ActiveValue::Set("41.50,-5.40".to_string()),
        extension: ActiveValue::Set(12.5),
        id_explotacion: ActiveValue::Set(id_explotacion),
        ..Default::default()
    };

    parcela.insert(db).await
}

pub async fn insert_animal(
    db: &DatabaseConnection,
    identificacion: &str,
    id_explotacion: i32,
) -> Result<entity::animal::Model, DbErr> {
    let animal = entity::animal::ActiveModel {
        identificacion: ActiveValue::Set(identificacion.to_string()),
        especie: ActiveValue::Set("Bovino".to_string()),
        estado: ActiveValue::Set("vivo".to_string()),
        fecha_nacimiento: ActiveValue::Set(fecha(2023, 3, 15)),
        fecha_alta: ActiveValue::Set(fecha(2023, 4, 1)),
        id_explotacion: ActiveValue::Set(id_explotacion),
        ..Default::default()
    };

    animal.insert(db).await
}

pub async fn insert_movimiento(
    db: &DatabaseConnection,
    id_animal: i32,
    dia: NaiveDate,
) -> Result<entity::movimiento::Model, DbErr> {
    let movimiento = entity::movimiento::ActiveModel {
        tipo: ActiveValue::Set("entrada".to_string()),
        fecha: ActiveValue::Set(dia),
        motivo: ActiveValue::Set("compra".to_string()),
        procedencia_destino: ActiveValue::Set("Explotación vecina".to_string()),
        id_animal: ActiveValue::Set(id_animal),
        ..Default::default()
    };

    movimiento.insert(db).await
}

pub async fn insert_incidencia(
    db: &DatabaseConnection,
    id_animal: i32,
    dia: NaiveDate,
) -> Result<entity::incidencia::Model, DbErr> {
    let incidencia = entity::incidencia::ActiveModel {
        fecha: ActiveValue::Set(dia),
        descripcion: ActiveValue::Set("Reidentificación por crotal perdido".to_string()),
        codigo_anterior: ActiveValue::Set(Some("ES001".to_string())),
        codigo_actual: ActiveValue::Set(Some("ES002".to_string())),
        id_animal: ActiveValue::Set(id_animal),
        ..Default::default()
    };

    incidencia.insert(db).await
}

pub async fn insert_alimentacion(
    db: &DatabaseConnection,
    factura: &str,
    id_explotacion: i32,
    dia: NaiveDate,
) -> Result<entity::alimentacion::Model, DbErr> {
    let alimentacion = entity::alimentacion::ActiveModel {
        fecha: ActiveValue::Set(dia),
        tipo: ActiveValue::Set("pienso".to_string()),
        cantidad: ActiveValue::Set(500.0),
        lote: ActiveValue::Set("L-2024-01".to_string()),
        factura: ActiveValue::Set(factura.to_string()),
        id_explotacion: ActiveValue::Set(id_explotacion),
        ..Default::default()
    };

    alimentacion.insert(db).await
}

pub async fn insert_medicamento(
    db: &DatabaseConnection,
    factura: &str,
    id_explotacion: i32,
    dia: NaiveDate,
) -> Result<entity::medicamento::Model, DbErr> {
    let medicamento = entity::medicamento::ActiveModel {
        fecha: ActiveValue::Set(dia),
        receta: ActiveValue::Set("R-1001".to_string()),
        medicamento: ActiveValue::Set("Antiparasitario".to_string()),
        factura: ActiveValue::Set(factura.to_string()),
        id_explotacion: ActiveValue::Set(id_explotacion),
        ..Default::default()
    };

    medicamento.insert(db).await
}

pub async fn insert_vacunacion(
    db: &DatabaseConnection,
    tipo: &str,
    id_explotacion: i32,
    dia: NaiveDate,
) -> Result<entity::vacunacion::Model, DbErr> {
    let vacunacion = entity::vacunacion::ActiveModel {
        fecha: ActiveValue::Set(dia),
        tipo: ActiveValue::Set(tipo.to_string()),
        dosis: ActiveValue::Set("2ml".to_string()),
        nombre_comercial: ActiveValue::Set("Bovivac".to_string()),
        veterinario: ActiveValue::Set("Col. 1234".to_string()),
        id_explotacion: ActiveValue::Set(id_explotacion),
        ..Default::default()
    };

    vacunacion.insert(db).await
}

pub async fn insert_vacunacion_animal(
    db: &DatabaseConnection,
    id_vacunacion: i32,
    id_animal: i32,
) -> Result<entity::vacunacion_animal::Model, DbErr> {
    let vacunacion_animal = entity::vacunacion_animal::ActiveModel {
        id_vacunacion: ActiveValue::Set(id_vacunacion),
        id_animal: ActiveValue::Set(id_animal),
        ..Default::default()
    };

    vacunacion_animal.insert(db).await
}

pub async fn insert_inspeccion(
    db: &DatabaseConnection,
    numero_acta: &str,
    id_explotacion: i32,
    dia: NaiveDate,
) -> Result<entity::inspeccion::Model, DbErr> {
    let inspeccion = entity::inspeccion::ActiveModel {
        fecha: ActiveValue::Set(dia),
        oficial: ActiveValue::Set(true),
        tipo: ActiveValue::Set("sanitaria".to_string()),
        numero_acta: ActiveValue::Set(numero_acta.to_string()),
        id_explotacion: ActiveValue::Set(id_explotacion),
        ..Default::default()
    };

    inspeccion.insert(db).await
}
