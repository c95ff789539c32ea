//! PDF rendering of the titular report.
//!
//! One title block with the titular's details, then a section per
//! explotación (parcelas, alimentación, medicamentos, inspecciones,
//! animales, each animal with its movimientos/incidencias/vacunaciones),
//! with a page break after every explotación. Section headers are colored;
//! body lines are plain black text.

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Rgb,
};

use crate::server::{
    error::Error,
    service::informe::{AnimalTree, ExplotacionTree, TitularTree},
    util::fecha::format_fecha,
};

const PAGE_WIDTH: f64 = 210.0;
const PAGE_HEIGHT: f64 = 297.0;
const MARGIN: f64 = 20.0;

const COLOR_TITULO: (f64, f64, f64) = (0.10, 0.14, 0.49);
const COLOR_EXPLOTACION: (f64, f64, f64) = (0.05, 0.28, 0.63);
const COLOR_SECCION: (f64, f64, f64) = (0.0, 0.47, 0.42);
const COLOR_SUBSECCION: (f64, f64, f64) = (0.36, 0.25, 0.22);
const COLOR_TEXTO: (f64, f64, f64) = (0.0, 0.0, 0.0);

/// Line advance per font size; enough for the builtin Helvetica metrics.
fn line_height(font_size: f64) -> f64 {
    font_size * 0.55
}

fn mm(value: f64) -> Mm {
    Mm(value as _)
}

struct InformeDoc {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    font: IndirectFontRef,
    y: f64,
}

impl InformeDoc {
    fn new(title: &str) -> Result<Self, Error> {
        let (doc, page, layer) =
            PdfDocument::new(title, mm(PAGE_WIDTH), mm(PAGE_HEIGHT), "Capa 1");
        let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            layer,
            font,
            y: PAGE_HEIGHT - MARGIN,
        })
    }

    fn new_page(&mut self) {
        let (page, layer) = self.doc.add_page(mm(PAGE_WIDTH), mm(PAGE_HEIGHT), "Capa 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT - MARGIN;
    }

    /// Writes one line at the given indent, breaking to a fresh page when
    /// the cursor runs past the bottom margin.
    fn line(&mut self, text: &str, font_size: f64, color: (f64, f64, f64), indent: f64) {
        if self.y - line_height(font_size) < MARGIN {
            self.new_page();
        }

        self.layer.set_fill_color(Color::Rgb(Rgb::new(
            color.0 as _,
            color.1 as _,
            color.2 as _,
            None,
        )));
        self.layer.use_text(
            text,
            font_size as _,
            mm(MARGIN + indent),
            mm(self.y),
            &self.font,
        );
        self.y -= line_height(font_size);
    }

    fn gap(&mut self, height: f64) {
        self.y -= height;
    }

    fn finish(self) -> Result<Vec<u8>, Error> {
        Ok(self.doc.save_to_bytes()?)
    }
}

pub fn render_informe(tree: &TitularTree) -> Result<Vec<u8>, Error> {
    let titular = &tree.titular;

    let mut doc = InformeDoc::new(&format!("Informe_{}", titular.id))?;

    doc.line(
        &format!("Informe de Titular: {}", titular.nombre),
        22.0,
        COLOR_TITULO,
        0.0,
    );
    doc.gap(4.0);

    doc.line(&format!("NIF: {}", titular.nif), 14.0, COLOR_TEXTO, 0.0);
    doc.line(
        &format!("Domicilio: {}", titular.domicilio),
        14.0,
        COLOR_TEXTO,
        0.0,
    );
    doc.line(
        &format!("Localidad: {}, {}", titular.localidad, titular.provincia),
        14.0,
        COLOR_TEXTO,
        0.0,
    );
    doc.line(
        &format!("Teléfono: {}", titular.telefono),
        14.0,
        COLOR_TEXTO,
        0.0,
    );
    doc.gap(8.0);

    for explotacion in &tree.explotaciones {
        render_explotacion(&mut doc, explotacion);
        doc.new_page();
    }

    doc.finish()
}

fn render_explotacion(doc: &mut InformeDoc, tree: &ExplotacionTree) {
    let explotacion = &tree.explotacion;

    doc.line(
        &format!("Explotación: {}", explotacion.nombre),
        18.0,
        COLOR_EXPLOTACION,
        0.0,
    );
    doc.line(
        &format!("Código REGA: {}", explotacion.codigo),
        13.0,
        COLOR_TEXTO,
        0.0,
    );
    doc.line(
        &format!("Dirección: {}", explotacion.direccion),
        13.0,
        COLOR_TEXTO,
        0.0,
    );
    doc.line(
        &format!(
            "Localidad: {}, {}",
            explotacion.localidad, explotacion.provincia
        ),
        13.0,
        COLOR_TEXTO,
        0.0,
    );
    doc.gap(4.0);

    if !tree.parcelas.is_empty() {
        doc.line("Parcelas:", 15.0, COLOR_SECCION, 0.0);
        for parcela in &tree.parcelas {
            doc.line(
                &format!("• Coordenadas: {}", parcela.coordenadas),
                12.0,
                COLOR_TEXTO,
                0.0,
            );
            doc.line(
                &format!("  Extensión: {} ha", parcela.extension),
                12.0,
                COLOR_TEXTO,
                0.0,
            );
            doc.gap(2.0);
        }
    }

    if !tree.alimentacion.is_empty() {
        doc.line("Alimentación:", 15.0, COLOR_SECCION, 0.0);
        for alimento in &tree.alimentacion {
            doc.line(
                &format!("• Fecha: {}", format_fecha(alimento.fecha)),
                12.0,
                COLOR_TEXTO,
                0.0,
            );
            doc.line(
                &format!(
                    "  Tipo: {}, Cantidad: {} kg, Lote: {}",
                    alimento.tipo, alimento.cantidad, alimento.lote
                ),
                12.0,
                COLOR_TEXTO,
                0.0,
            );
            doc.line(&format!("  Factura: {}", alimento.factura), 12.0, COLOR_TEXTO, 0.0);
            doc.gap(2.0);
        }
    }

    if !tree.medicamentos.is_empty() {
        doc.line("Medicamentos:", 15.0, COLOR_SECCION, 0.0);
        for medicamento in &tree.medicamentos {
            doc.line(
                &format!("• Fecha: {}", format_fecha(medicamento.fecha)),
                12.0,
                COLOR_TEXTO,
                0.0,
            );
            doc.line(
                &format!(
                    "  Receta: {}, Medicamento: {}",
                    medicamento.receta, medicamento.medicamento
                ),
                12.0,
                COLOR_TEXTO,
                0.0,
            );
            doc.line(
                &format!("  Factura: {}", medicamento.factura),
                12.0,
                COLOR_TEXTO,
                0.0,
            );
            doc.gap(2.0);
        }
    }

    if !tree.inspecciones.is_empty() {
        doc.line("Inspecciones:", 15.0, COLOR_SECCION, 0.0);
        for inspeccion in &tree.inspecciones {
            doc.line(
                &format!("• Fecha: {}", format_fecha(inspeccion.fecha)),
                12.0,
                COLOR_TEXTO,
                0.0,
            );
            doc.line(
                &format!(
                    "  Tipo: {}, Oficial: {}",
                    inspeccion.tipo,
                    if inspeccion.oficial { "Sí" } else { "No" }
                ),
                12.0,
                COLOR_TEXTO,
                0.0,
            );
            doc.line(
                &format!("  Nº Acta: {}", inspeccion.numero_acta),
                12.0,
                COLOR_TEXTO,
                0.0,
            );
            doc.gap(2.0);
        }
    }

    if !tree.animales.is_empty() {
        doc.line("Animales:", 15.0, COLOR_SECCION, 0.0);
        for animal in &tree.animales {
            render_animal(doc, animal);
        }
    }
}

fn render_animal(doc: &mut InformeDoc, tree: &AnimalTree) {
    let animal = &tree.animal;

    doc.line(
        &format!("• ID: {}", animal.identificacion),
        12.0,
        COLOR_TEXTO,
        0.0,
    );
    doc.line(
        &format!("  Especie: {}, Estado: {}", animal.especie, animal.estado),
        12.0,
        COLOR_TEXTO,
        0.0,
    );
    doc.line(
        &format!("  Nacimiento: {}", format_fecha(animal.fecha_nacimiento)),
        12.0,
        COLOR_TEXTO,
        0.0,
    );
    doc.line(
        &format!("  Alta: {}", format_fecha(animal.fecha_alta)),
        12.0,
        COLOR_TEXTO,
        0.0,
    );
    doc.gap(2.0);

    if !tree.movimientos.is_empty() {
        doc.line("Movimientos:", 12.0, COLOR_SUBSECCION, 4.0);
        for movimiento in &tree.movimientos {
            doc.line(
                &format!(
                    "Tipo: {}, Fecha: {}",
                    movimiento.tipo,
                    format_fecha(movimiento.fecha)
                ),
                12.0,
                COLOR_TEXTO,
                8.0,
            );
            doc.line(
                &format!(
                    "Motivo: {}, Origen/Destino: {}",
                    movimiento.motivo, movimiento.procedencia_destino
                ),
                12.0,
                COLOR_TEXTO,
                8.0,
            );
            doc.gap(2.0);
        }
    }

    if !tree.incidencias.is_empty() {
        doc.line("Incidencias:", 12.0, COLOR_SUBSECCION, 4.0);
        for incidencia in &tree.incidencias {
            doc.line(
                &format!("Fecha: {}", format_fecha(incidencia.fecha)),
                12.0,
                COLOR_TEXTO,
                8.0,
            );
            doc.line(
                &format!("Descripción: {}", incidencia.descripcion),
                12.0,
                COLOR_TEXTO,
                8.0,
            );
            doc.line(
                &format!(
                    "Código anterior: {}, Código actual: {}",
                    incidencia.codigo_anterior.as_deref().unwrap_or("-"),
                    incidencia.codigo_actual.as_deref().unwrap_or("-")
                ),
                12.0,
                COLOR_TEXTO,
                8.0,
            );
            doc.gap(2.0);
        }
    }

    if !tree.vacunaciones.is_empty() {
        doc.line("Vacunaciones:", 12.0, COLOR_SUBSECCION, 4.0);
        for vacunacion in &tree.vacunaciones {
            doc.line(
                &format!("Fecha: {}", format_fecha(vacunacion.fecha)),
                12.0,
                COLOR_TEXTO,
                8.0,
            );
            doc.line(
                &format!(
                    "Tipo: {}, Dosis: {}",
                    vacunacion.tipo, vacunacion.dosis
                ),
                12.0,
                COLOR_TEXTO,
                8.0,
            );
            doc.line(
                &format!(
                    "Nombre comercial: {}, Veterinario: {}",
                    vacunacion.nombre_comercial, vacunacion.veterinario
                ),
                12.0,
                COLOR_TEXTO,
                8.0,
            );
            doc.gap(2.0);
        }
    }

    doc.gap(3.0);
}
