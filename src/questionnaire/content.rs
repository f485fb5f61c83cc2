//! Fixed guidance texts for the questionnaire rules.
//!
//! Each topic has a text for the desirable answer and one for the answer
//! that needs attention. A few also carry a professional-only note shown
//! next to the patient text.

use crate::models::enums::FoodGroup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Content {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicContent {
    pub positive: Content,
    pub negative: Content,
    pub professional: Option<&'static str>,
}

pub const CLINICAL_ALERT_PREFIX: &str = "ALERTA CLÍNICO:";
pub const INVESTIGATE_MESSAGE: &str = "Faça uma avaliação mais aprofundada.";
pub const INVESTIGATE_MESSAGE_UPPER: &str = "FAÇA UMA AVALIAÇÃO MAIS APROFUNDADA.";
pub const FOOD_RECALL_NOTE: &str = "Verificar recordatório alimentar.";

macro_rules! produce_hygiene {
    () => {
        "Higienização de frutas, verduras e legumes: A fim de evitar a contaminação pelo Toxoplasma goondi (causador da toxoplasmose), é recomendado lavar frutas, legumes ou verduras em água corrente e depois os colocar imersos em uma solução de 1 colher de hipoclorito de sódio ou 1 colher de água sanitária própria para uso em alimentos para um litro de água, por 15 minutos. Após esse período, enxaguar em água corrente. Assim, os alimentos estarão prontos e seguros para o consumo."
    };
}

// ─── Diet quality ────────────────────────────────────────────────────────────

pub const FRUITS_VEGETABLES: TopicContent = TopicContent {
    positive: Content {
        title: "Consumo Adequado de Frutas e Vegetais",
        body: concat!(
            "É recomendado manter esse hábito.\n\n\
             Prefira o consumo de vegetais verde-escuros, como brócolis, couve, espinafre, agrião, rúcula, de alimentos vermelho-alaranjados, como abóbora/jerimum, cenoura e tomate e de frutas amarelas e vermelhas, como laranja, mamão, acerola, caju, pêssego, manga, jabuticaba, ameixa, que são alimentos fontes dos nutrientes importantes para a gestação.\n\n",
            produce_hygiene!()
        ),
    },
    negative: Content {
        title: "Baixo Consumo de Frutas e Vegetais",
        body: concat!(
            "SOBRE AS FRUTAS\n\
             - Consuma frutas diariamente, de preferência inteiras, em vez de sucos. Priorize as frutas da sua região e que estão na safra.\n\
             - As frutas podem ser consumidas frescas ou secas (desidratadas): no café da manhã e nos lanches entre as refeições, com iogurte natural, leite e aveia ou como cremes; e no almoço e no jantar, em saladas de folhas ou como sobremesas.\n\
             - Para evitar o desperdício, opte pelo congelamento das frutas para elas sejam usadas depois em preparações.\n\
             - Prefira as frutas amarelas e vermelhas, como laranja, mamão, acerola, caju, pêssego, manga, jabuticaba, ameixa, que são alimentos fontes dos nutrientes importantes para a gestação;\n\
             - Em caso de náuseas, escolha frutas cítricas ou frutas geladas pois podem ser melhor toleradas, como laranja, tangerina, abacaxi e até mesmo a água com limão espremido.\n\n\
             SOBRE VERDURAS E LEGUMES\n\
             - Consuma legumes e verduras diariamente no almoço e no jantar. Priorize alimentos da sua região e que estão na safra.\n\
             - Esses alimentos podem ser consumidos em saladas cruas, em preparações quentes (cozidos, refogados, assados, gratinados, empanados, ensopados), em preparações culinárias, como omelete com legumes, arroz com legumes, feijão, bolinho de espinafre, tortas, sopas e, em alguns casos, recheados ou na forma de purês;\n\
             - Utilize verduras como temperos naturais, a fim de temperar e realçar o sabor das preparações, como cheiro-verde, alho, cebola, manjericão, gengibre, pimenta-do-reino, cominho, louro, hortelã, jambu, orégano, coentro, alecrim, pimentão, tomate, entre outros);\n\
             - Prefira consumir vegetais verde-escuros, como brócolis, couve, espinafre, agrião, rúcula e alimentos vermelho-alaranjados, como abóbora/jerimum, cenoura e tomate, que são alimentos fontes de nutrientes importantes para a gestação.\n\n",
            produce_hygiene!()
        ),
    },
    professional: None,
};

pub const DAIRY_PRODUCTS: TopicContent = TopicContent {
    positive: Content {
        title: "Consumo Adequado de Laticínios",
        body: "É recomendado manter esse hábito. Opte por consumir esses alimentos nos lanches.\n\
               Atenção: os laticínios pasteurizados ou UHT e de preferência desnatados ou semidesnatados.",
    },
    negative: Content {
        title: "Baixo Consumo de Laticínios",
        body: "Opte por consumir esses alimentos nos lanches.\n\n\
               Se não houver restrições ao consumo de alimentos desse grupo:\n\
               - prefira os leites, as coalhadas e os iogurtes em opções semidesnatadas ou desnatadas.\n\
               - consuma de forma menos frequente os queijos.\n\
               ATENÇÃO: os laticínios devem ser pasteurizados ou UHT.\n\n\
               Se houver restrições ao consumo de alimentos desse grupo:\n\
               - é recomendada a ingestão adequada de alimentos fonte de proteína (animais ou vegetais);\n\
               - opte pelo consumo de bebidas vegetais enriquecidas com cálcio nos lanches.",
    },
    professional: Some(
        "Avaliar necessidade de suplementação de cálcio e vitamina B12 e monitorar ingestão de cálcio/proteínas.",
    ),
};

pub const WHOLE_GRAINS: TopicContent = TopicContent {
    positive: Content {
        title: "Consumo Adequado de Cereais Integrais",
        body: "É recomendado manter esse hábito.\n\
               Nos lanches: Aveia, quinoa, amaranto, gérmen de trigo, milho, tapioca, cuscuz, preparações caseiras com farinhas de cereais integrais (bolo, biscoito, torrada, pão).\n\
               Nas refeições principais (almoço e jantar): Arroz integral ou parboilizado, cuscuz, macarrão integral, quinoa em grão, macaxeira, batata doce, batata baroa, batata inglesa, polenta.",
    },
    negative: Content {
        title: "Baixo Consumo de Cereais Integrais",
        body: "Oriente preferir cereais integrais.\n\
               Nos lanches: Aveia, quinoa, amaranto, gérmen de trigo, milho, tapioca, cuscuz, preparações caseiras com farinhas de cereais integrais (bolo, biscoito, torrada, pão).\n\
               Nas refeições principais (almoço e jantar): Arroz integral ou parboilizado, cuscuz, macarrão integral, quinoa em grão, macaxeira, batata doce, batata baroa, batata inglesa, polenta.",
    },
    professional: None,
};

pub const MEAT_POULTRY_EGGS: TopicContent = TopicContent {
    positive: Content {
        title: "Ingestão Adequada de Carnes/Ovos",
        body: "É recomendado manter esse hábito.\n\
               Prefira o consumo de pescado e ovos.\n\
               Sobre as carnes vermelhas ou de aves, prefira os cortes com menos gordura, estes podem ser utilizados no preparo de ensopados. Já cortes mais gordurosos, prefira seu consumo assado, grelhado ou refogado, evitando peles ou gorduras aparentes, utilizando a menor quantidade possível de gordura e sal no seu preparo, priorizando ervas e outros temperos naturais.\n\
               ATENÇÃO: EVITE OVOS E CARNES MAL COZIDAS.",
    },
    negative: Content {
        title: "Baixa Ingestão de Carnes/Ovos",
        body: "Se não houver restrições ao consumo de alimentos desse grupo, prefira o consumo de pescado e ovos.\n\
               Sobre as carnes vermelhas ou de aves, prefira os cortes com menos gordura, estes podem ser utilizados no preparo de ensopados. Já cortes mais gordurosos, prefira seu consumo assado, grelhado ou refogado, evitando peles ou gorduras aparentes, utilizando a menor quantidade possível de gordura e sal no seu preparo, priorizando ervas e outros temperos naturais.\n\
               ATENÇÃO: EVITE OVOS E CARNES MAL COZIDAS.\n\n\
               Se houver restrições ao consumo de alimentos desse grupo, é recomendado o consumo adequado de proteínas vegetais (leguminosas e oleaginosas) e/ou de laticínios.",
    },
    professional: None,
};

pub const PLANT_PROTEINS: TopicContent = TopicContent {
    positive: Content {
        title: "Consumo Adequado de Leguminosas/Oleaginosas",
        body: "- É recomendado manter esse hábito.\n\
               - Realize o remolho dos grãos, essa técnica reduz o tempo de cozimento e o desconforto gastrointestinal que esse alimento pode causar, além de melhorar a absorção de seus nutrientes. Os grãos devem ficar imersos em água, antes do cozimento, por período de 6 a 12 horas, com a realização de, pelo menos, uma troca de água nesse intervalo de tempo e descarte dessa água após o tempo de remolho, não devendo ser usada na cocção.\n\
               - Consuma na mesma refeição das leguminosas, frutas ricas em vitamina C (laranja, acerola, limão e caju) e frutas ou legumes amarelo-alaranjados ricos em carotenoides (mamão e manga e abóbora e cenoura), principalmente se você não consumir carnes.",
    },
    negative: Content {
        title: "Baixo Consumo de Leguminosas/Oleaginosas",
        body: "LEGUMINOSAS:\n\
               - Consuma leguminosas (feijão de todas as variedades, lentilha, soja, grão-de-bico, ervilha ou fava) diariamente, de preferência no almoço e no jantar.\n\
               - Varie a forma de preparo dessas leguminosas: arroz com feijão, tutu de feijão, feijão tropeiro, baião de dois, podem estar presentes no acarajé, em pastas, sopas e saladas, entre outros.\n\
               - Realize o remolho dos grãos, essa técnica reduz o tempo de cozimento e o desconforto gastrointestinal que esse alimento pode causar, além de melhorar a absorção de seus nutrientes. Os grãos devem ficar imersos em água, antes do cozimento, por período de 6 a 12 horas, com a realização de, pelo menos, uma troca de água nesse intervalo de tempo e descarte dessa água após o tempo de remolho, não devendo ser usada na cocção.\n\
               - Congele o alimento já preparado para que possa ser consumido ao longo dos dias da semana de forma prática.\n\
               - Consuma na mesma refeição das leguminosas, frutas ricas em vitamina C (laranja, acerola, limão e caju) e frutas ou legumes amarelo-alaranjados ricos em carotenoides (mamão e manga e abóbora e cenoura), principalmente se você não consumir carnes.\n\n\
               OLEAGINOSAS:\n\
               - Consuma sementes e castanhas, com frutas, iogurtes, saladas, preparações, entre outros.",
    },
    professional: None,
};

/// Inverted topic: answering "no" is the desirable answer.
pub const PROCESSED_FOODS: TopicContent = TopicContent {
    positive: Content {
        title: "Baixa Ingestão de Ultraprocessados",
        body: "É recomendado manter esse hábito.\n\
               Priorizar o consumo de alimentos naturais e comidas caseiras.",
    },
    negative: Content {
        title: "Alto Consumo de Ultraprocessados",
        body: "- Evite o consumo de alimentos prontos para o consumo.\n\
               No almoço e jantar, prefira comidas caseiras, como arroz e feijão, macarrão, carnes, ovos, legumes e verduras, mandioca, milho, além de frutas como sobremesa.\n\
               Nos lanches, prefira o consumo de leite ou iogurte natural (aqueles sem adição de açúcar ou sabor artificial) acompanhado de frutas frescas ou secas, castanhas, amendoim ou nozes, cuscuz, tapioca, pamonha, pão francês, entre outros.\n\
               Quando fora de casa, se planeje e leve alimentos saudáveis e práticos para transporte e consumo, como frutas e castanhas.",
    },
    professional: None,
};

pub const FISH: TopicContent = TopicContent {
    positive: Content {
        title: "Ingestão Semanal de Peixes Adequada",
        body: "É recomendado manter esse hábito.\n\
               Prefira peixes como sardinha, cavala, pargo ou atum enlatado.",
    },
    negative: Content {
        title: "Baixo Consumo Semanal de Peixe",
        body: "Se não houver restrições ao consumo de alimentos desse grupo, prefira peixes como sardinha, cavala, pargo ou atum enlatado.",
    },
    professional: Some(
        "Considere a necessidade de suplementar 200-600mg DHA com selo de isenção de metais pesados; opte por opção de alga para gestante com restrição a peixe.",
    ),
};

/// Patient text for vegetarian diets, where fish is excluded by choice.
pub const FISH_VEGETARIAN_BODY: &str = "Como sua dieta não inclui peixes, garanta fontes vegetais de ômega-3, como linhaça, chia e nozes, e converse com a equipe de saúde sobre a suplementação de DHA.";

pub const FISH_VEGETARIAN_PROFESSIONAL: &str = "Gestante com dieta vegetariana sem consumo de peixe. Considere suplementar 200-600mg de DHA de origem algal.";

pub fn food_group_content(group: FoodGroup) -> &'static TopicContent {
    match group {
        FoodGroup::FruitsVegetables => &FRUITS_VEGETABLES,
        FoodGroup::DairyProducts => &DAIRY_PRODUCTS,
        FoodGroup::WholeGrains => &WHOLE_GRAINS,
        FoodGroup::MeatPoultryEggs => &MEAT_POULTRY_EGGS,
        FoodGroup::PlantProteins => &PLANT_PROTEINS,
        FoodGroup::ProcessedFoods => &PROCESSED_FOODS,
    }
}

// ─── Supplements ─────────────────────────────────────────────────────────────

const PRESCRIPTION: &str = "Utilizar suplementação conforme prescrição.";

const IRON_BODY: &str = "Utilizar suplementação conforme prescrição.\n\
    A ingestão do suplemento de ferro deve ocorrer com intervalo mínimo de 2 horas do suplemento de cálcio, pois a absorção do ferro pode ficar diminuída.\n\
    Opte por ingerir o suplemento de ferro antes de refeições onde serão consumidas frutas ricas em vitamina C (laranja, acerola, limão, caju, entre outras).";

const CALCIUM_BODY: &str = "Utilizar suplementação conforme prescrição.\n\
    - A ingestão do suplemento de cálcio deve ocorrer com intervalo mínimo de 2 horas do suplemento de ferro (sulfato ferroso) ou de polivitamínicos contendo ferro.\n\
    - O suplemento de cálcio não seja ingerido em jejum.\n\
    - Evite a ingestão do suplemento de cálcio junto de alimentos como feijão, fígado, espinafre, acelga, couve, beterraba, batata doce, sementes, castanhas ou cereais, café, alimentos ultraprocessados (alimentos prontos para o consumo e ricos em sal, açúcar e/ou gordura);\n\
    - Prefira ingerir o suplemento de cálcio no período da noite acompanhado de um copo de leite ou suco de frutas.";

pub const FOLIC_ACID: TopicContent = TopicContent {
    positive: Content {
        title: "Verificar Dosagem de Ácido Fólico",
        body: PRESCRIPTION,
    },
    negative: Content {
        title: "Suplementação de Ácido Fólico Necessária",
        body: PRESCRIPTION,
    },
    professional: None,
};

pub const FOLIC_ACID_LATE_NOTE: &str = "Após o primeiro trimestre, avaliar a continuidade da suplementação de ácido fólico conforme a conduta do serviço.";

pub const IRON: TopicContent = TopicContent {
    positive: Content {
        title: "Verificar Dosagem de Ferro",
        body: IRON_BODY,
    },
    negative: Content {
        title: "Suplementação de Ferro Necessária",
        body: IRON_BODY,
    },
    professional: None,
};

pub const CALCIUM: TopicContent = TopicContent {
    positive: Content {
        title: "Verificar Dosagem de Cálcio",
        body: CALCIUM_BODY,
    },
    negative: Content {
        title: "Suplementação de Cálcio Necessária",
        body: CALCIUM_BODY,
    },
    professional: None,
};

// ─── Lifestyle ───────────────────────────────────────────────────────────────

pub const SUN_EXPOSURE_LOW: Content = Content {
    title: "Baixa Exposição à Luz Solar",
    body: "Considere a necessidade de suplementar 600-2000UI de vitamina D/dia.",
};

macro_rules! activity_guidance {
    () => {
        "Atividade física moderada ou vigorosa:\n\
         * Atividade moderada: é possível conversar com dificuldade enquanto se exercita, mas não é possível cantar. A respiração e os batimentos do coração aumentam moderadamente.\n\
         * Atividade vigorosa: não é possível conversar. A respiração fica muito mais rápida que o normal, assim como os batimentos do coração."
    };
}

pub const PHYSICAL_ACTIVITY: TopicContent = TopicContent {
    positive: Content {
        title: "Nível Adequado de Atividade Física",
        body: concat!(
            "Caso não exista contraindicação, pratique atividade física até o dia do parto.\n\
             É recomendada a prática de 150 minutos de atividade física moderada ou de 75 minutos de exercício vigoroso por semana.\n\
             Mantenha ou aumente a intensidade e o tempo de duração progressivamente, praticando atividades de intensidade moderada, de acordo com a sua capacidade e respeitando seus limites.\n\
             Se você já tiver uma rotina de exercício constante e vigoroso anterior à gravidez, mantenha essa prática de atividades físicas vigorosas na gestação.\n",
            activity_guidance!()
        ),
    },
    negative: Content {
        title: "Inatividade Física",
        body: concat!(
            "Caso não exista contraindicação, pratique atividade física até o dia do parto.\n\
             É recomendada a prática de 150 minutos de atividade física moderada ou de 75 minutos de exercício vigoroso por semana.\n\
             Se você for sedentária, comece com uma atividade física de intensidade leve e com tempo de menor duração. Aumente a intensidade e o tempo de duração progressivamente, praticando atividades de intensidade leve a moderada, de acordo com a sua capacidade e respeitando seus limites.\n\
             Se você já tiver uma rotina de exercício constante e vigoroso anterior à gestação, mantenha essa prática de atividade física vigorosa na gestação.\n",
            activity_guidance!()
        ),
    },
    professional: None,
};

macro_rules! caffeine_guidance {
    () => {
        "SOBRE OS CHÁS:\n\
         Consuma apenas chás considerados seguros para a gestação - hortelã, camomila, erva-cidreira e boldo. Outros chás são contraindicados pois podem gerar riscos para a gravidez.\n\n\
         SOBRE O CAFÉ:\n\
         A dose máxima segura para consumo de café é de uma xícara por dia. Quantidades maiores podem gerar riscos para a gravidez."
    };
}

/// Positive is "consumes", negative is "does not consume"; both are `info`.
pub const COFFEE_TEA: TopicContent = TopicContent {
    positive: Content {
        title: "Consumo de Chá/Café",
        body: caffeine_guidance!(),
    },
    negative: Content {
        title: "Sem Consumo de Chá/Café",
        body: concat!(
            "Esses alimentos não precisam ser consumidos na gestação, mas se esse for o seu desejo, aqui vão algumas orientações:\n",
            caffeine_guidance!()
        ),
    },
    professional: None,
};

pub const SUBSTANCES: TopicContent = TopicContent {
    positive: Content {
        title: "Sem Uso de Substâncias",
        body: "Gestante não faz uso de substâncias contraindicadas para o período.",
    },
    negative: Content {
        title: "Uso de Substâncias Contraindicadas",
        body: "Todas as substâncias lícitas ou ilícitas utilizadas durante a gestação afetam o desenvolvimento do bebê e o colocam em risco.\n\n\
               Riscos associados às substâncias de uso mais comuns:\n\
               Álcool: aborto, natimorto, baixo peso ao nascer, síndrome alcoólica fetal (alterações mentais e físicas irreversíveis) e paralisia cerebral.\n\
               Tabaco: aborto, natimorto, baixo peso ao nascer, descolamento prematuro de placenta, prematuridade e más-formações congênitas.\n\
               Maconha: aborto, natimorto, baixo peso ao nascer, restrição de crescimento fetal, descolamento prematuro de placenta, prematuridade e maior necessidade de internação do bebê em unidade de terapia intensiva.\n\
               Cocaína e crack: doença renais ou cardíacas no bebê, alterações no perímetro cefálico ao nascer, baixo peso ao nascer, descolamento prematuro de placenta e prematuridade.",
    },
    professional: None,
};

pub fn clinical_title(title: &str) -> String {
    format!("{CLINICAL_ALERT_PREFIX} {title}")
}
