//! Per-titular report aggregator.
//!
//! Given a titular id, materializes the full object graph (titular →
//! explotaciones → {parcelas, animales, alimentación, medicamentos,
//! inspecciones} → {movimientos, incidencias, vacunaciones}) into one
//! in-memory tree and serializes it as nested JSON or a multi-page PDF.
//!
//! Child collections are loaded with one batched statement per table
//! (`IN` on the parent ids, grouped in memory) rather than one query per
//! parent row. The whole result set is materialized before serialization
//! begins; any load error aborts the report with no partial output.

pub mod pdf;

use std::collections::HashMap;

use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    model::informe::{
        DatosAlimentacionDto, DatosAnimalDto, DatosExplotacionDto, DatosIncidenciaDto,
        DatosInspeccionDto, DatosMedicamentoDto, DatosMovimientoDto, DatosParcelaDto,
        DatosTitularDto, DatosVacunacionDto, TitularDatosDto,
    },
    server::{
        data::{
            alimentacion::AlimentacionRepository, animal::AnimalRepository,
            explotacion::ExplotacionRepository, incidencia::IncidenciaRepository,
            inspeccion::InspeccionRepository, medicamento::MedicamentoRepository,
            movimiento::MovimientoRepository, parcela::ParcelaRepository,
            titular::TitularRepository, vacunacion::VacunacionRepository,
        },
        error::Error,
        util::fecha::{format_fecha, in_rango},
    },
};

/// Inclusive date window applied to every dated child collection of the
/// PDF report. Parcelas and animales themselves are never filtered.
#[derive(Clone, Copy)]
pub struct RangoFechas {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// The fully materialized graph below one titular.
pub struct TitularTree {
    pub titular: entity::titular::Model,
    pub usuario: entity::usuario::Model,
    pub explotaciones: Vec<ExplotacionTree>,
}

pub struct ExplotacionTree {
    pub explotacion: entity::explotacion::Model,
    pub parcelas: Vec<entity::parcela::Model>,
    pub animales: Vec<AnimalTree>,
    pub alimentacion: Vec<entity::alimentacion::Model>,
    pub medicamentos: Vec<entity::medicamento::Model>,
    pub inspecciones: Vec<entity::inspeccion::Model>,
}

pub struct AnimalTree {
    pub animal: entity::animal::Model,
    pub movimientos: Vec<entity::movimiento::Model>,
    pub incidencias: Vec<entity::incidencia::Model>,
    pub vacunaciones: Vec<entity::vacunacion::Model>,
}

pub struct InformeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InformeService<'a> {
    /// Creates a new instance of [`InformeService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Structured export of everything belonging to one titular.
    ///
    /// Returns `Ok(None)` when the titular does not exist; the endpoint
    /// responds with a `null` body in that case rather than a 404.
    pub async fn titular_datos(&self, titular_id: i32) -> Result<Option<TitularDatosDto>, Error> {
        let tree = match self.load_tree(titular_id, None).await? {
            Some(tree) => tree,
            None => return Ok(None),
        };

        Ok(Some(datos_dto(tree)))
    }

    /// Renders the PDF report, restricted to the inclusive [start, end]
    /// window of [`RangoFechas`].
    pub async fn informe_pdf(
        &self,
        titular_id: i32,
        rango: RangoFechas,
    ) -> Result<Vec<u8>, Error> {
        let tree = self
            .load_tree(titular_id, Some(rango))
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("titular {} not found", titular_id)))?;

        pdf::render_informe(&tree)
    }

    async fn load_tree(
        &self,
        titular_id: i32,
        rango: Option<RangoFechas>,
    ) -> Result<Option<TitularTree>, Error> {
        let titular_repository = TitularRepository::new(self.db);
        let explotacion_repository = ExplotacionRepository::new(self.db);
        let parcela_repository = ParcelaRepository::new(self.db);
        let animal_repository = AnimalRepository::new(self.db);
        let movimiento_repository = MovimientoRepository::new(self.db);
        let incidencia_repository = IncidenciaRepository::new(self.db);
        let vacunacion_repository = VacunacionRepository::new(self.db);
        let alimentacion_repository = AlimentacionRepository::new(self.db);
        let medicamento_repository = MedicamentoRepository::new(self.db);
        let inspeccion_repository = InspeccionRepository::new(self.db);

        let titular = match titular_repository.get_by_id(titular_id).await? {
            Some(titular) => titular,
            None => return Ok(None),
        };

        let usuario = titular_repository
            .get_usuario_by_titular_id(titular_id)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!("usuario of titular {} not found", titular_id))
            })?;

        let explotaciones = explotacion_repository.get_by_titular_id(titular_id).await?;
        let explotacion_ids: Vec<i32> = explotaciones.iter().map(|e| e.id).collect();

        let animales = animal_repository
            .get_by_explotacion_ids(&explotacion_ids)
            .await?;
        let animal_ids: Vec<i32> = animales.iter().map(|a| a.id).collect();

        let mut parcelas = group_by(
            parcela_repository
                .get_by_explotacion_ids(&explotacion_ids)
                .await?,
            |p| p.id_explotacion,
        );
        let mut alimentacion = group_by(
            filtrar(
                alimentacion_repository
                    .get_by_explotacion_ids(&explotacion_ids)
                    .await?,
                rango,
                |a| a.fecha,
            ),
            |a| a.id_explotacion,
        );
        let mut medicamentos = group_by(
            filtrar(
                medicamento_repository
                    .get_by_explotacion_ids(&explotacion_ids)
                    .await?,
                rango,
                |m| m.fecha,
            ),
            |m| m.id_explotacion,
        );
        let mut inspecciones = group_by(
            filtrar(
                inspeccion_repository
                    .get_by_explotacion_ids(&explotacion_ids)
                    .await?,
                rango,
                |i| i.fecha,
            ),
            |i| i.id_explotacion,
        );

        let mut movimientos = group_by(
            filtrar(
                movimiento_repository.get_by_animal_ids(&animal_ids).await?,
                rango,
                |m| m.fecha,
            ),
            |m| m.id_animal,
        );
        let mut incidencias = group_by(
            filtrar(
                incidencia_repository.get_by_animal_ids(&animal_ids).await?,
                rango,
                |i| i.fecha,
            ),
            |i| i.id_animal,
        );

        let mut vacunaciones: HashMap<i32, Vec<entity::vacunacion::Model>> = HashMap::new();
        for (join_row, campaign) in vacunacion_repository.get_by_animal_ids(&animal_ids).await? {
            let Some(campaign) = campaign else { continue };

            if rango.is_none_or(|r| in_rango(campaign.fecha, r.start, r.end)) {
                vacunaciones
                    .entry(join_row.id_animal)
                    .or_default()
                    .push(campaign);
            }
        }

        let mut animales_por_explotacion = group_by(animales, |a| a.id_explotacion);

        let explotaciones = explotaciones
            .into_iter()
            .map(|explotacion| {
                let animales = animales_por_explotacion
                    .remove(&explotacion.id)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|animal| AnimalTree {
                        movimientos: movimientos.remove(&animal.id).unwrap_or_default(),
                        incidencias: incidencias.remove(&animal.id).unwrap_or_default(),
                        vacunaciones: vacunaciones.remove(&animal.id).unwrap_or_default(),
                        animal,
                    })
                    .collect();

                ExplotacionTree {
                    parcelas: parcelas.remove(&explotacion.id).unwrap_or_default(),
                    alimentacion: alimentacion.remove(&explotacion.id).unwrap_or_default(),
                    medicamentos: medicamentos.remove(&explotacion.id).unwrap_or_default(),
                    inspecciones: inspecciones.remove(&explotacion.id).unwrap_or_default(),
                    animales,
                    explotacion,
                }
            })
            .collect();

        Ok(Some(TitularTree {
            titular,
            usuario,
            explotaciones,
        }))
    }
}

fn filtrar<T>(
    rows: Vec<T>,
    rango: Option<RangoFechas>,
    fecha_of: impl Fn(&T) -> NaiveDate,
) -> Vec<T> {
    match rango {
        Some(rango) => rows
            .into_iter()
            .filter(|row| in_rango(fecha_of(row), rango.start, rango.end))
            .collect(),
        None => rows,
    }
}

fn group_by<T>(rows: Vec<T>, key_of: impl Fn(&T) -> i32) -> HashMap<i32, Vec<T>> {
    let mut grouped: HashMap<i32, Vec<T>> = HashMap::new();
    for row in rows {
        grouped.entry(key_of(&row)).or_default().push(row);
    }

    grouped
}

fn datos_dto(tree: TitularTree) -> TitularDatosDto {
    let TitularTree {
        titular,
        usuario,
        explotaciones,
    } = tree;

    TitularDatosDto {
        titular: DatosTitularDto {
            id: titular.id,
            nombre: titular.nombre,
            nif: titular.nif,
            domicilio: titular.domicilio,
            localidad: titular.localidad,
            provincia: titular.provincia,
            codigo_postal: titular.codigo_postal,
            telefono: titular.telefono,
            usuario: usuario.into(),
        },
        explotaciones: explotaciones.into_iter().map(datos_explotacion_dto).collect(),
    }
}

fn datos_explotacion_dto(tree: ExplotacionTree) -> DatosExplotacionDto {
    let explotacion = tree.explotacion;

    DatosExplotacionDto {
        id: explotacion.id,
        codigo: explotacion.codigo,
        nombre: explotacion.nombre,
        direccion: explotacion.direccion,
        localidad: explotacion.localidad,
        provincia: explotacion.provincia,
        codigo_postal: explotacion.codigo_postal,
        especies: explotacion.especies,
        coordenadas: explotacion.coordenadas,
        parcelas: tree
            .parcelas
            .into_iter()
            .map(|parcela| DatosParcelaDto {
                id: parcela.id,
                coordenadas: parcela.coordenadas,
                extension: parcela.extension,
            })
            .collect(),
        animales: tree.animales.into_iter().map(datos_animal_dto).collect(),
        alimentacion: tree
            .alimentacion
            .into_iter()
            .map(|alimento| DatosAlimentacionDto {
                id: alimento.id,
                fecha: format_fecha(alimento.fecha),
                tipo: alimento.tipo,
                cantidad: alimento.cantidad,
                lote: alimento.lote,
                factura: alimento.factura,
            })
            .collect(),
        medicamentos: tree
            .medicamentos
            .into_iter()
            .map(|medicamento| DatosMedicamentoDto {
                id: medicamento.id,
                fecha: format_fecha(medicamento.fecha),
                receta: medicamento.receta,
                medicamento: medicamento.medicamento,
                factura: medicamento.factura,
            })
            .collect(),
        inspecciones: tree
            .inspecciones
            .into_iter()
            .map(|inspeccion| DatosInspeccionDto {
                id: inspeccion.id,
                fecha: format_fecha(inspeccion.fecha),
                oficial: inspeccion.oficial,
                tipo: inspeccion.tipo,
                numero_acta: inspeccion.numero_acta,
            })
            .collect(),
    }
}

fn datos_animal_dto(tree: AnimalTree) -> DatosAnimalDto {
    let animal = tree.animal;

    DatosAnimalDto {
        id: animal.id,
        identificacion: animal.identificacion,
        especie: animal.especie,
        estado: animal.estado,
        fecha_nacimiento: format_fecha(animal.fecha_nacimiento),
        fecha_alta: format_fecha(animal.fecha_alta),
        movimientos: tree
            .movimientos
            .into_iter()
            .map(|movimiento| DatosMovimientoDto {
                id: movimiento.id,
                tipo: movimiento.tipo,
                fecha: format_fecha(movimiento.fecha),
                motivo: movimiento.motivo,
                procedencia_destino: movimiento.procedencia_destino,
            })
            .collect(),
        incidencias: tree
            .incidencias
            .into_iter()
            .map(|incidencia| DatosIncidenciaDto {
                id: incidencia.id,
                fecha: format_fecha(incidencia.fecha),
                descripcion: incidencia.descripcion,
                codigo_anterior: incidencia.codigo_anterior,
                codigo_actual: incidencia.codigo_actual,
            })
            .collect(),
        vacunaciones: tree
            .vacunaciones
            .into_iter()
            .map(|vacunacion| DatosVacunacionDto {
                id: vacunacion.id,
                fecha: format_fecha(vacunacion.fecha),
                tipo: vacunacion.tipo,
                dosis: vacunacion.dosis,
                nombre_comercial: vacunacion.nombre_comercial,
                veterinario: vacunacion.veterinario,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use agromano_test_utils::prelude::*;
    use sea_orm::DatabaseConnection;

    use crate::server::service::informe::{InformeService, RangoFechas};

    /// Two explotaciones, two animals each, one child record per section.
    async fn seed_titular(db: &DatabaseConnection) -> Result<i32, TestError> {
        let usuario = factory::insert_usuario(db, "dueno@example.com").await?;
        let titular = factory::insert_titular(db, "11111111A", usuario.id).await?;

        for (codigo, sufijo) in [("ES-A", "A"), ("ES-B", "B")] {
            let explotacion = factory::insert_explotacion(db, codigo, titular.id).await?;
            factory::insert_parcela(db, explotacion.id).await?;
            factory::insert_alimentacion(
                db,
                &format!("F-{}", sufijo),
                explotacion.id,
                factory::fecha(2024, 5, 20),
            )
            .await?;
            factory::insert_medicamento(
                db,
                &format!("FM-{}", sufijo),
                explotacion.id,
                factory::fecha(2024, 6, 10),
            )
            .await?;
            factory::insert_inspeccion(
                db,
                &format!("ACTA-{}", sufijo),
                explotacion.id,
                factory::fecha(2024, 7, 1),
            )
            .await?;

            let vacunacion = factory::insert_vacunacion(
                db,
                "aftosa",
                explotacion.id,
                factory::fecha(2024, 6, 1),
            )
            .await?;

            for n in 1..=2 {
                let animal = factory::insert_animal(
                    db,
                    &format!("ES{}{:04}", sufijo, n),
                    explotacion.id,
                )
                .await?;
                factory::insert_movimiento(db, animal.id, factory::fecha(2024, 4, 15)).await?;
                factory::insert_incidencia(db, animal.id, factory::fecha(2024, 8, 3)).await?;
                factory::insert_vacunacion_animal(db, vacunacion.id, animal.id).await?;
            }
        }

        Ok(titular.id)
    }

    #[tokio::test]
    /// Expect N explotación nodes with M animal nodes each, and every date
    /// formatted as YYYY-MM-DD
    async fn test_titular_datos_shape() -> Result<(), TestError> {
        let test = test_setup_with_agromano_tables!()?;
        let titular_id = seed_titular(&test.db).await?;

        let informe_service = InformeService::new(&test.db);
        let datos = informe_service
            .titular_datos(titular_id)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(datos.explotaciones.len(), 2);
        for explotacion in &datos.explotaciones {
            assert_eq!(explotacion.animales.len(), 2);
            assert_eq!(explotacion.parcelas.len(), 1);
            assert_eq!(explotacion.alimentacion.len(), 1);
            assert_eq!(explotacion.alimentacion[0].fecha, "2024-05-20");
            assert_eq!(explotacion.medicamentos[0].fecha, "2024-06-10");
            assert_eq!(explotacion.inspecciones[0].fecha, "2024-07-01");

            for animal in &explotacion.animales {
                assert_eq!(animal.fecha_nacimiento, "2023-03-15");
                assert_eq!(animal.movimientos[0].fecha, "2024-04-15");
                assert_eq!(animal.incidencias[0].fecha, "2024-08-03");
                assert_eq!(animal.vacunaciones[0].fecha, "2024-06-01");
            }
        }

        assert!(!datos.titular.usuario.email.is_empty());

        Ok(())
    }

    #[tokio::test]
    /// Expect None for a titular id with no row behind it
    async fn test_titular_datos_missing_titular() -> Result<(), TestError> {
        let test = test_setup_with_agromano_tables!()?;

        let informe_service = InformeService::new(&test.db);
        let datos = informe_service.titular_datos(999).await.unwrap();

        assert!(datos.is_none());

        Ok(())
    }

    #[tokio::test]
    /// Expect records outside the inclusive window to be dropped from every
    /// section while parcelas and animales stay untouched
    async fn test_load_tree_filters_by_rango() -> Result<(), TestError> {
        let test = test_setup_with_agromano_tables!()?;
        let titular_id = seed_titular(&test.db).await?;

        let informe_service = InformeService::new(&test.db);
        // Window covering only the feed purchases (2024-05-20) and the
        // vaccination campaigns (2024-06-01), bounds inclusive on both ends.
        let rango = RangoFechas {
            start: factory::fecha(2024, 5, 20),
            end: factory::fecha(2024, 6, 1),
        };

        let tree = informe_service
            .load_tree(titular_id, Some(rango))
            .await
            .unwrap()
            .unwrap();

        for explotacion in &tree.explotaciones {
            assert_eq!(explotacion.alimentacion.len(), 1);
            assert!(explotacion.medicamentos.is_empty());
            assert!(explotacion.inspecciones.is_empty());
            assert_eq!(explotacion.parcelas.len(), 1);
            assert_eq!(explotacion.animales.len(), 2);

            for animal in &explotacion.animales {
                assert!(animal.movimientos.is_empty());
                assert!(animal.incidencias.is_empty());
                assert_eq!(animal.vacunaciones.len(), 1);
            }
        }

        Ok(())
    }

    #[tokio::test]
    /// Expect a rendered PDF (magic header) for a seeded titular
    async fn test_informe_pdf_renders() -> Result<(), TestError> {
        let test = test_setup_with_agromano_tables!()?;
        let titular_id = seed_titular(&test.db).await?;

        let informe_service = InformeService::new(&test.db);
        let bytes = informe_service
            .informe_pdf(
                titular_id,
                RangoFechas {
                    start: factory::fecha(2024, 1, 1),
                    end: factory::fecha(2024, 12, 31),
                },
            )
            .await
            .unwrap();

        assert!(bytes.starts_with(b"%PDF"));

        Ok(())
    }

    #[tokio::test]
    /// Expect an error (not an empty document) for a missing titular
    async fn test_informe_pdf_missing_titular() -> Result<(), TestError> {
        let test = test_setup_with_agromano_tables!()?;

        let informe_service = InformeService::new(&test.db);
        let result = informe_service
            .informe_pdf(
                999,
                RangoFechas {
                    start: factory::fecha(2024, 1, 1),
                    end: factory::fecha(2024, 12, 31),
                },
            )
            .await;

        assert!(result.is_err());

        Ok(())
    }
}
