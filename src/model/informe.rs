use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::usuario::UsuarioDto;

/// Date range for the PDF report; both bounds are inclusive.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct InformeRangoDto {
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,
    #[serde(rename = "endDate")]
    pub end_date: NaiveDate,
}

/// Structured export of everything belonging to one titular. Dates are
/// preformatted as `YYYY-MM-DD` strings.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TitularDatosDto {
    pub titular: DatosTitularDto,
    pub explotaciones: Vec<DatosExplotacionDto>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DatosTitularDto {
    pub id: i32,
    pub nombre: String,
    pub nif: String,
    pub domicilio: String,
    pub localidad: String,
    pub provincia: String,
    pub codigo_postal: String,
    pub telefono: String,
    pub usuario: UsuarioDto,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DatosExplotacionDto {
    pub id: i32,
    pub codigo: String,
    pub nombre: String,
    pub direccion: String,
    pub localidad: String,
    pub provincia: String,
    pub codigo_postal: String,
    pub especies: String,
    pub coordenadas: String,
    pub parcelas: Vec<DatosParcelaDto>,
    pub animales: Vec<DatosAnimalDto>,
    pub alimentacion: Vec<DatosAlimentacionDto>,
    pub medicamentos: Vec<DatosMedicamentoDto>,
    pub inspecciones: Vec<DatosInspeccionDto>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DatosParcelaDto {
    pub id: i32,
    pub coordenadas: String,
    pub extension: f64,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DatosAnimalDto {
    pub id: i32,
    pub identificacion: String,
    pub especie: String,
    pub estado: String,
    pub fecha_nacimiento: String,
    pub fecha_alta: String,
    pub movimientos: Vec<DatosMovimientoDto>,
    pub incidencias: Vec<DatosIncidenciaDto>,
    pub vacunaciones: Vec<DatosVacunacionDto>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DatosMovimientoDto {
    pub id: i32,
    pub tipo: String,
    pub fecha: String,
    pub motivo: String,
    pub procedencia_destino: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DatosIncidenciaDto {
    pub id: i32,
    pub fecha: String,
    pub descripcion: String,
    pub codigo_anterior: Option<String>,
    pub codigo_actual: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DatosVacunacionDto {
    pub id: i32,
    pub fecha: String,
    pub tipo: String,
    pub dosis: String,
    pub nombre_comercial: String,
    pub veterinario: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DatosAlimentacionDto {
    pub id: i32,
    pub fecha: String,
    pub tipo: String,
    pub cantidad: f64,
    pub lote: String,
    pub factura: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DatosMedicamentoDto {
    pub id: i32,
    pub fecha: String,
    pub receta: String,
    pub medicamento: String,
    pub factura: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DatosInspeccionDto {
    pub id: i32,
    pub fecha: String,
    pub oficial: bool,
    pub tipo: String,
    pub numero_acta: String,
}
