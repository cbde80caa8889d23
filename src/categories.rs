/// One official-brands category on the site. The id is kept as a string
/// because the main-page sentinel is "-1" and the API accepts it verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
}

/// Every category the crawl covers, in processing order. The sentinel
/// main-page listing goes first; it also carries shops that have no
/// category assigned yet.
pub const CATEGORIES: &[Category] = &[
    Category { id: "-1", name: "Página Principal" },
    Category { id: "11059998", name: "Roupas Femininas" },
    Category { id: "11059983", name: "Casa e Construção" },
    Category { id: "11059974", name: "Beleza" },
    Category { id: "11059986", name: "Roupas Masculinas" },
    Category { id: "11059999", name: "Sapatos Femininos" },
    Category { id: "11059987", name: "Sapatos Masculinos" },
    Category { id: "11059988", name: "Celulares e Dispositivos" },
    Category { id: "11059973", name: "Moda Infantil" },
    Category { id: "11059978", name: "Acessórios de Moda" },
    Category { id: "11059992", name: "Esportes e Lazer" },
    Category { id: "11059984", name: "Eletroportáteis" },
    Category { id: "11059982", name: "Brinquedos e Hobbies" },
    Category { id: "11059972", name: "Automóveis" },
    Category { id: "11059981", name: "Saúde" },
    Category { id: "11059989", name: "Mãe e Bebê" },
    Category { id: "11059971", name: "Áudio" },
    Category { id: "11059993", name: "Papelaria" },
    Category { id: "11059997", name: "Bolsas Femininas" },
    Category { id: "11059985", name: "Bolsas Masculinas" },
    Category { id: "11059991", name: "Animais Domésticos" },
    Category { id: "11059990", name: "Motocicletas" },
    Category { id: "11059977", name: "Computadores e Acessórios" },
    Category { id: "11059979", name: "Alimentos e Bebidas" },
    Category { id: "11059980", name: "Jogos e Consoles" },
    Category { id: "11059975", name: "Livros e Revistas" },
];
