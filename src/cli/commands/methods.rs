use crate::models::method::{CalculationMethod, School};
use crate::ui::messages::header;
use crate::utils::table::{Column, Table};

pub fn handle() {
    header("Calculation methods");
    let mut methods = Table::new(vec![Column::new("Code", 4), Column::new("Method", 10)]);
    for m in CalculationMethod::ALL {
        methods.add_row(vec![m.code().to_string(), m.label().to_string()]);
    }
    println!("{}", methods.fit().render());

    header("Juristic schools (Asr)");
    let mut schools = Table::new(vec![Column::new("Code", 4), Column::new("School", 10)]);
    for s in School::ALL {
        schools.add_row(vec![s.code().to_string(), s.label().to_string()]);
    }
    println!("{}", schools.fit().render());
}
