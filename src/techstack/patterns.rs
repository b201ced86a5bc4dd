//! Static label -> substring-pattern tables for tech-stack detection.
//!
//! A canonical label is detected when any of its patterns appears as a
//! case-insensitive substring of a dependency name taken from a manifest.
//! The three categories are independent tables; a dependency name may
//! match entries in more than one of them.

pub type PatternTable = &'static [(&'static str, &'static [&'static str])];

pub const FRAMEWORKS: PatternTable = &[
    (
        "React",
        &["react", "react-dom", "react-scripts", "next", "gatsby", "remix", "@remix-run"],
    ),
    ("Next.js", &["next", "@next"]),
    ("Express", &["express", "express-"]),
    (
        "Angular",
        &["@angular/core", "@angular/common", "@angular/platform-browser", "@angular/compiler"],
    ),
    ("Vue", &["vue", "vue-router", "vuex", "nuxt", "@vue"]),
    ("Django", &["django", "djangorestframework", "django-cors-headers"]),
    ("Flask", &["flask", "flask-restful", "flask-sqlalchemy"]),
    ("Spring", &["spring-boot", "spring-core", "spring-web", "spring-data"]),
    ("Laravel", &["laravel", "@laravel"]),
    ("Rails", &["rails", "@rails"]),
    ("Node.js", &["node", "nodemon"]),
    ("FastAPI", &["fastapi", "uvicorn"]),
    ("NestJS", &["@nestjs"]),
    ("Svelte", &["svelte", "sveltekit"]),
    ("Ember", &["ember", "@ember"]),
    ("Meteor", &["meteor"]),
    ("Phoenix", &["phoenix"]),
    ("ASP.NET", &["@aspnet", "@microsoft/aspnetcore"]),
];

pub const DATABASES: PatternTable = &[
    ("MongoDB", &["mongodb", "mongoose", "mongodb-core", "@mongodb"]),
    (
        "PostgreSQL",
        &["pg", "postgres", "postgresql", "sequelize", "typeorm", "prisma"],
    ),
    ("MySQL", &["mysql", "mysql2", "sequelize", "typeorm", "prisma"]),
    ("Redis", &["redis", "ioredis", "redis-client"]),
    ("SQLite", &["sqlite3", "better-sqlite3", "sequelize", "typeorm"]),
    ("Oracle", &["oracledb", "oracle"]),
    ("Firebase", &["firebase", "@firebase", "firebase-admin"]),
    ("Cassandra", &["cassandra-driver", "cassandra"]),
    ("Elasticsearch", &["elasticsearch", "@elastic/elasticsearch"]),
    ("DynamoDB", &["dynamodb", "@aws-sdk/client-dynamodb"]),
    ("Neo4j", &["neo4j", "neo4j-driver"]),
    ("MariaDB", &["mariadb", "mariadb-connector"]),
    ("CouchDB", &["couchdb", "nano"]),
    ("InfluxDB", &["influxdb", "@influxdata/influxdb-client"]),
];

pub const TOOLS: PatternTable = &[
    ("Git", &["git", "simple-git", "git-clone"]),
    ("Docker", &["docker", "docker-compose", "@docker"]),
    ("VS Code", &["vscode", "@vscode"]),
    ("AWS", &["aws-sdk", "@aws-sdk", "aws-lambda", "aws-cdk"]),
    ("Azure", &["@azure", "azure-functions", "azure-storage"]),
    ("GCP", &["@google-cloud", "google-cloud-storage", "firebase-admin"]),
    ("Kubernetes", &["kubernetes", "@kubernetes/client-node"]),
    ("Jenkins", &["jenkins", "jenkins-api"]),
    ("Nginx", &["nginx", "nginx-conf"]),
    ("Apache", &["apache", "apache2"]),
    ("Terraform", &["terraform", "@terraform"]),
    ("Ansible", &["ansible", "node-ansible"]),
    ("CircleCI", &["circleci", "@circleci"]),
    ("Travis CI", &["travis-ci", "@travis-ci"]),
    ("GitHub Actions", &["@actions/core", "@actions/github"]),
    ("Webpack", &["webpack", "webpack-cli", "webpack-dev-server"]),
    ("Babel", &["@babel/core", "@babel/preset-env", "@babel/preset-react"]),
    ("TypeScript", &["typescript", "@types", "ts-node"]),
    ("ESLint", &["eslint", "@eslint"]),
    ("Prettier", &["prettier", "@prettier"]),
    ("Jest", &["jest", "@jest"]),
    ("Mocha", &["mocha", "@mocha"]),
    ("Cypress", &["cypress", "@cypress"]),
    ("Selenium", &["selenium-webdriver", "@selenium"]),
    ("Swagger", &["swagger", "@swagger"]),
    ("GraphQL", &["graphql", "@apollo/client", "apollo-server"]),
];
