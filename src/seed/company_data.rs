//! Company reference rows

pub const GLOBAL_COMPANIES: &[(&str, &str)] = &[
    ("Apple Inc.", "American multinational technology company known for iPhone, Mac, and other consumer electronics."),
    ("Microsoft Corporation", "Global leader in software, cloud computing, and technology services."),
    ("Google LLC (Alphabet Inc.)", "Multinational conglomerate specializing in internet-related products and services."),
    ("Amazon.com, Inc.", "Global e-commerce, cloud computing, and AI company headquartered in Seattle."),
    ("Meta Platforms, Inc.", "Parent company of Facebook, Instagram, and WhatsApp."),
    ("Toyota Motor Corporation", "Japanese multinational automotive manufacturer and world leader in hybrid vehicles."),
    ("Tesla, Inc.", "American company specializing in electric vehicles and clean energy products."),
    ("Volkswagen Group", "German multinational automotive manufacturer owning Audi, Porsche, and Lamborghini."),
    ("JPMorgan Chase & Co.", "Largest bank in the United States by assets, offering global financial services."),
    ("HSBC Holdings plc", "British multinational bank serving customers in over 60 countries."),
    ("Mastercard Incorporated", "Global payment technology company connecting consumers, financial institutions, and merchants."),
    ("Visa Inc.", "Global leader in digital payments and financial technology."),
    ("AT&T Inc.", "American multinational telecommunications and media company."),
    ("Verizon Communications Inc.", "One of the largest telecommunications companies in the world."),
    ("ExxonMobil Corporation", "American multinational oil and gas corporation."),
    ("Shell plc", "Global energy and petrochemical company headquartered in London."),
    ("BP (British Petroleum)", "Multinational oil and gas company based in the United Kingdom."),
    ("Nestlé S.A.", "Swiss multinational food and beverage company, the largest in the world by revenue."),
    ("The Coca-Cola Company", "American beverage corporation known for its flagship soft drink brand Coca-Cola."),
    ("PepsiCo, Inc.", "Multinational food, snack, and beverage corporation."),
    ("Unilever PLC", "British-Dutch multinational consumer goods company known for Dove, Lifebuoy, and Knorr."),
    ("Harvard University", "Private Ivy League research university in Cambridge, Massachusetts."),
    ("Massachusetts Institute of Technology (MIT)", "World-renowned research university focused on science and technology."),
    ("Stanford University", "Private research university in Stanford, California, known for innovation and entrepreneurship."),
    ("SpaceX", "Aerospace manufacturer and space transport services company founded by Elon Musk."),
    ("Starlink", "Satellite internet constellation being constructed by SpaceX."),
];

/// Utilities and institutions keyed by currency code
pub fn currency_companies(currency_code: &str) -> &'static [(&'static str, &'static str)] {
    match currency_code {
        "USD" => &[
            ("Pacific Gas and Electric Company (PG&E)", "One of the largest combined natural gas and electric utilities in the United States, serving Northern and Central California."),
            ("Duke Energy Corporation", "Major electric power holding company serving customers in the Southeast and Midwest United States."),
            ("Consolidated Edison, Inc. (Con Edison)", "Provides electric, gas, and steam service in New York City and Westchester County."),
            ("Florida Power & Light Company (FPL)", "The largest electric utility in Florida, providing power to over 5 million customer accounts."),
            ("American Water Works Company, Inc.", "Largest publicly traded U.S. water and wastewater utility company, serving 14 million people across 24 states."),
            ("Aqua America (Essential Utilities)", "Provides water and wastewater services to communities in eight U.S. states."),
            ("California Water Service (Cal Water)", "Provides regulated and reliable water services to California communities."),
            ("Comcast Xfinity", "One of the largest cable television and internet service providers in the U.S."),
            ("AT&T Internet", "Major internet and telecommunications service provider in the United States."),
            ("Verizon Fios", "Fiber-optic internet, TV, and phone service operated by Verizon Communications."),
            ("Spectrum (Charter Communications)", "Cable television, internet, and phone provider serving millions across the U.S."),
            ("Southern California Gas Company (SoCalGas)", "The largest natural gas distribution utility in the United States."),
            ("National Grid USA", "Provides natural gas and electricity distribution services in the Northeastern United States."),
            ("Waste Management, Inc.", "Leading provider of waste collection, disposal, and recycling services across the U.S."),
            ("Republic Services, Inc.", "Environmental services company providing waste collection and recycling solutions nationwide."),
        ],
        "EUR" => &[
            ("E.ON SE", "One of Europe's largest electric utility service providers headquartered in Essen, Germany."),
            ("Deutsche Telekom AG", "Major telecommunications company providing internet, mobile, and landline services across Europe."),
            ("Berliner Wasserbetriebe", "The largest water supply and wastewater disposal company in Germany, serving Berlin and surrounding areas."),
            ("Vodafone GmbH", "Leading broadband, cable TV, and mobile communications provider based in Düsseldorf, Germany."),
            ("RWE AG", "Energy company focused on electricity generation, renewable energy, and trading headquartered in Essen."),
        ],
        "JPY" => &[
            ("Tokyo Electric Power Company (TEPCO)", "Japan's largest electric utility company providing electricity to the Greater Tokyo Area."),
            ("Tokyo Gas Co., Ltd.", "Japan's largest natural gas utility company supplying energy and related services to households and industries in Tokyo."),
            ("NTT Communications Corporation", "Major telecommunications and internet service provider under Nippon Telegraph and Telephone Corporation."),
            ("SoftBank Corp.", "Leading Japanese telecom and internet company providing mobile, broadband, and enterprise network services."),
            ("Tokyo Metropolitan Waterworks Bureau", "Official public utility providing clean water supply and wastewater management services in Tokyo."),
        ],
        "GBP" => &[
            ("British Gas", "The UK's leading energy and home services provider, supplying gas and electricity to millions of households."),
            ("Thames Water", "The largest water and wastewater services company in the UK, serving London and surrounding areas."),
            ("BT Group plc", "Formerly British Telecom, BT is one of the UK's main broadband, landline, and TV service providers."),
            ("Virgin Media O2", "A major telecom and internet provider offering broadband, mobile, and digital TV services across the UK."),
            ("Scottish Power", "A leading UK energy supplier focusing on renewable electricity generation and green energy solutions."),
        ],
        "AUD" => &[
            ("Origin Energy", "One of Australia's leading energy companies providing electricity, natural gas, and solar solutions to homes and businesses."),
            ("Sydney Water", "Australia’s largest water utility supplying high-quality drinking water, wastewater, and stormwater services across Sydney."),
            ("Telstra Corporation Limited", "Australia’s biggest telecommunications and internet service provider offering broadband, mobile, and digital TV services."),
            ("AGL Energy", "Leading Australian electricity and gas retailer generating power through both traditional and renewable energy sources."),
            ("Jemena", "Australian energy infrastructure company managing electricity and gas distribution networks across multiple states."),
            ("Spotless Group Holdings", "Property management and maintenance service provider offering cleaning, repairs, and facility support for residential and commercial clients."),
        ],
        "CAD" => &[
            ("Hydro One", "Ontario-based electricity transmission and distribution utility providing power to millions of homes and businesses across Canada."),
            ("Enbridge Gas Inc.", "One of Canada’s largest natural gas distributors delivering energy to residential, commercial, and industrial customers nationwide."),
            ("Bell Canada", "Leading telecommunications and internet provider offering mobile, broadband, and digital television services throughout Canada."),
            ("Rogers Communications", "Major Canadian communications and media company providing internet, cable TV, and mobile services to consumers and businesses."),
            ("Toronto Water", "Municipal water service providing clean water supply and wastewater treatment to residents of Toronto and nearby areas."),
            ("FirstService Corporation", "North American property services and maintenance company providing cleaning, building repair, and residential management solutions."),
        ],
        _ => &[],
    }
}
