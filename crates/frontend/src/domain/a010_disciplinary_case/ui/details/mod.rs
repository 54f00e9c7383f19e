mod view;
mod view_model;

pub use view::NewDisciplinaryCase;
pub use view_model::NewDisciplinaryCaseViewModel;
